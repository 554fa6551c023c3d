use super::*;

/// Tests moving a request to a service in another group.
///
/// Expected: Ok with the new service and its group
#[tokio::test]
async fn moves_request_with_service_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let other_group = factory::service_group::create_service_group(db).await?;
    let other_service = factory::service::create_service(db, other_group.id).await?;
    assert_ne!(service.group_id, other_group.id);

    let updated = ServiceRequestService::new(db)
        .update(UpdateServiceRequestParam {
            id: request.id,
            service_id: Some(other_service.id),
            resolved: Some(true),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.service_id, other_service.id);
    assert_eq!(updated.group_id, Some(other_group.id));
    assert!(updated.is_resolved());

    Ok(())
}

/// Expected: Ok(None) for a missing request
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServiceRequestService::new(db)
        .update(UpdateServiceRequestParam {
            id: 42,
            description: Some("Updated".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Expected: Err(BadRequest) when switching to an unknown status
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;

    let result = ServiceRequestService::new(db)
        .update(UpdateServiceRequestParam {
            id: request.id,
            status_id: Some(999),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

use super::*;

/// Tests that marking a request resolved stamps the resolution time once.
///
/// Expected: Ok with `resolved_at` set and kept on a second resolve
#[tokio::test]
async fn resolving_stamps_resolution_time_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;

    let repo = ServiceRequestRepository::new(db);
    let resolved = repo
        .update(UpdateServiceRequestParam {
            id: request.id,
            resolved: Some(true),
            ..Default::default()
        })
        .await?;
    let first_resolution = resolved.resolved_at;
    assert!(first_resolution.is_some());

    let again = repo
        .update(UpdateServiceRequestParam {
            id: request.id,
            resolved: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(again.resolved_at, first_resolution);

    Ok(())
}

/// Tests reopening a resolved request.
///
/// Expected: Ok with `resolved_at` cleared
#[tokio::test]
async fn reopening_clears_resolution_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let request = factory::service_request::ServiceRequestFactory::new(
        db,
        service.id,
        priority.id,
        status.id,
    )
    .group_id(group.id)
    .resolved_at(Utc::now())
    .build()
    .await?;

    let repo = ServiceRequestRepository::new(db);
    let reopened = repo
        .update(UpdateServiceRequestParam {
            id: request.id,
            resolved: Some(false),
            description: Some("Leak returned".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(reopened.resolved_at.is_none());
    assert_eq!(reopened.description, "Leak returned");
    assert_eq!(reopened.status_id, status.id);

    Ok(())
}

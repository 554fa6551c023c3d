use super::*;

/// Expected: Err(BadRequest) while a service request uses the priority
#[tokio::test]
async fn refuses_to_delete_referenced_priority() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;

    let result = PriorityService::new(db).delete(request.priority_id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Ok(true) for an unused priority, Ok(false) once gone
#[tokio::test]
async fn deletes_unused_priority() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let priority = factory::priority::create_priority(db).await?;
    let service = PriorityService::new(db);

    assert!(service.delete(priority.id).await?);
    assert!(!service.delete(priority.id).await?);

    Ok(())
}

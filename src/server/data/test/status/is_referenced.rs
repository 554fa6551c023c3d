use super::*;

/// Expected: true only for statuses carried by a service request
#[tokio::test]
async fn detects_status_used_by_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let unused = factory::status::create_status(db).await?;

    let repo = StatusRepository::new(db);

    assert!(repo.is_referenced(request.status_id).await?);
    assert!(!repo.is_referenced(unused.id).await?);

    Ok(())
}

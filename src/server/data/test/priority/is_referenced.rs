use super::*;

/// Tests reference detection through service requests.
///
/// Expected: true for the priority in use, false for an unused one
#[tokio::test]
async fn detects_priority_used_by_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let unused = factory::priority::create_priority(db).await?;
    factory::service_request::create_service_request(db, service.id, priority.id, status.id)
        .await?;

    let repo = PriorityRepository::new(db);

    assert!(repo.is_referenced(priority.id).await?);
    assert!(!repo.is_referenced(unused.id).await?);

    Ok(())
}

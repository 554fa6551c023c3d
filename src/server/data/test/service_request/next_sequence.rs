use super::*;

/// Tests the sequence for a service with no codes yet.
///
/// Expected: Ok(1)
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, _priority, _status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;

    let repo = ServiceRequestRepository::new(db);

    assert_eq!(repo.next_sequence(service.id, "WTR26").await?, 1);

    Ok(())
}

/// Tests that the sequence follows the highest code of the same service and prefix.
///
/// Expected: Ok(4) for `WTR26` when `WTR2600003` exists, ignoring other years
#[tokio::test]
async fn follows_highest_code_with_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    for code in ["WTR2600001", "WTR2600003", "WTR2500009"] {
        factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
            .code(code)
            .build()
            .await?;
    }

    let repo = ServiceRequestRepository::new(db);

    assert_eq!(repo.next_sequence(service.id, "WTR26").await?, 4);
    assert_eq!(repo.next_sequence(service.id, "WTR25").await?, 10);

    Ok(())
}

/// Tests that codes of another service sharing the prefix are ignored.
///
/// Expected: Ok(1) for service `W` although `W262600042` belongs to service `W26`
#[tokio::test]
async fn ignores_other_services_with_same_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, long) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let short = factory::service::ServiceFactory::new(db, long.group_id)
        .code("W")
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, long.id, priority.id, status.id)
        .code("W262600042")
        .build()
        .await?;

    let repo = ServiceRequestRepository::new(db);

    assert_eq!(repo.next_sequence(short.id, "W26").await?, 1);
    assert_eq!(repo.next_sequence(long.id, "W2626").await?, 43);

    Ok(())
}

use super::*;

/// Tests loading a service with its group and default priority.
///
/// Expected: Ok(Some) with both references resolved
#[tokio::test]
async fn resolves_group_and_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, priority, _status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;

    let repo = ServiceRepository::new(db);
    let found = repo.get_by_id(service.id).await?.unwrap();

    assert_eq!(found.group.map(|g| g.id), Some(group.id));
    assert_eq!(found.priority.map(|p| p.name), Some(priority.name));

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_missing_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}

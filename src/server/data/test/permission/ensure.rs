use super::*;

/// Tests that ensuring the same permission twice creates it once.
///
/// Expected: Ok with the same id returned and a normalized wildcard
#[tokio::test]
async fn creates_permission_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermissionRepository::new(db);
    let params = CreatePermissionParam {
        resource: "Priorities".to_string(),
        action: "Create".to_string(),
        description: None,
    };

    let first = repo.ensure(params.clone()).await?;
    let second = repo.ensure(params).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.wildcard, "priorities:create");
    assert_eq!(repo.all_ids().await?, vec![first.id]);

    Ok(())
}

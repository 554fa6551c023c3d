use super::*;

/// Tests creating a role with permission grants.
///
/// Expected: Ok with each wildcard listed once
#[tokio::test]
async fn grants_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let create = factory::permission::create_permission(db, "comments", "create").await?;
    let delete = factory::permission::create_permission(db, "comments", "delete").await?;

    let repo = RoleRepository::new(db);
    let role = repo
        .create(CreateRoleParam {
            name: "Agent".to_string(),
            description: None,
            permission_ids: vec![delete.id, create.id, create.id],
        })
        .await?;

    assert_eq!(
        role.permissions,
        vec!["comments:create".to_string(), "comments:delete".to_string()]
    );

    Ok(())
}

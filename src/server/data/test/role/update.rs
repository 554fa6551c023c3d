use super::*;

/// Tests that providing permissions replaces the granted set.
///
/// Expected: Ok with only the new wildcard
#[tokio::test]
async fn replaces_permissions_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::permission::create_permission(db, "statuses", "edit").await?;
    let new = factory::permission::create_permission(db, "statuses", "delete").await?;
    let role = factory::role::RoleFactory::new(db)
        .permissions(vec![old.id])
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let updated = repo
        .update(UpdateRoleParam {
            id: role.id,
            permission_ids: Some(vec![new.id]),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.permissions, vec!["statuses:delete".to_string()]);

    Ok(())
}

/// Tests that omitting permissions keeps existing grants.
///
/// Expected: Ok with the original wildcard and the new description
#[tokio::test]
async fn keeps_permissions_when_omitted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let edit = factory::permission::create_permission(db, "statuses", "edit").await?;
    let role = factory::role::RoleFactory::new(db)
        .permissions(vec![edit.id])
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let updated = repo
        .update(UpdateRoleParam {
            id: role.id,
            description: Some("Edits statuses".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.permissions, vec!["statuses:edit".to_string()]);
    assert_eq!(updated.description.as_deref(), Some("Edits statuses"));

    Ok(())
}

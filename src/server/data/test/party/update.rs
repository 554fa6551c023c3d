use super::*;

/// Tests assigning a role through an update.
///
/// Expected: Ok with the new role and its permissions
#[tokio::test]
async fn assigns_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let view = factory::permission::create_permission(db, "services", "create").await?;
    let role = factory::role::RoleFactory::new(db)
        .permissions(vec![view.id])
        .build()
        .await?;
    let party = factory::party::create_party(db).await?;

    let repo = PartyRepository::new(db);
    let updated = repo
        .update(UpdatePartyParam {
            id: party.id,
            role_id: Some(role.id),
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert!(updated.has_permission("services:create"));

    Ok(())
}

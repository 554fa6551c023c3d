use super::*;

/// Tests loading a party with its role and permission wildcards.
///
/// Expected: Ok(Some) with role name and sorted wildcards
#[tokio::test]
async fn loads_role_and_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let edit = factory::permission::create_permission(db, "priorities", "edit").await?;
    let create = factory::permission::create_permission(db, "priorities", "create").await?;
    let role = factory::role::RoleFactory::new(db)
        .name("Supervisor")
        .permissions(vec![edit.id, create.id])
        .build()
        .await?;
    let party = factory::party::PartyFactory::new(db)
        .role_id(role.id)
        .build()
        .await?;

    let repo = PartyRepository::new(db);
    let found = repo.find_by_id(party.id).await?.unwrap();

    assert_eq!(found.role.map(|r| r.name), Some("Supervisor".to_string()));
    assert_eq!(
        found.permissions,
        vec!["priorities:create".to_string(), "priorities:edit".to_string()]
    );

    Ok(())
}

/// Tests a party without a role.
///
/// Expected: Ok(Some) with no role and no permissions
#[tokio::test]
async fn party_without_role_has_no_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let repo = PartyRepository::new(db);
    let found = repo.find_by_id(party.id).await?.unwrap();

    assert!(found.role.is_none());
    assert!(found.permissions.is_empty());
    assert!(found.is_confirmed());

    Ok(())
}

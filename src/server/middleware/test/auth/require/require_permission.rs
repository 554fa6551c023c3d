use super::*;

/// Tests a party whose role grants the required permission.
///
/// Expected: Ok(Party) carrying the wildcard
#[tokio::test]
async fn grants_access_with_role_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let permission = factory::permission::create_permission(db, "priorities", "create").await?;
    let role = factory::role::RoleFactory::new(db)
        .permissions(vec![permission.id])
        .build()
        .await?;
    let party = factory::party::PartyFactory::new(db)
        .role_id(role.id)
        .build()
        .await?;

    let tokens = tokens();
    let headers = bearer(&tokens.issue(party.id)?);

    let returned = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::new(Resource::Priorities, Action::Create)])
        .await?;

    assert_eq!(returned.id, party.id);
    assert!(returned.has_permission("priorities:create"));

    Ok(())
}

/// Tests that every listed permission is checked.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing wildcard
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let permission = factory::permission::create_permission(db, "priorities", "create").await?;
    let role = factory::role::RoleFactory::new(db)
        .permissions(vec![permission.id])
        .build()
        .await?;
    let party = factory::party::PartyFactory::new(db)
        .role_id(role.id)
        .build()
        .await?;

    let tokens = tokens();
    let headers = bearer(&tokens.issue(party.id)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::new(Resource::Priorities, Action::Create),
            Permission::new(Resource::Priorities, Action::Delete),
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(party_id, wildcard))) => {
            assert_eq!(party_id, party.id);
            assert_eq!(wildcard, "priorities:delete");
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a party without a role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_party_without_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let headers = bearer(&tokens.issue(party.id)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::new(Resource::Settings, Action::Edit)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

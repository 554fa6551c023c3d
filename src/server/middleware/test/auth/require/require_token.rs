use super::*;

/// Tests a request without an authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let party = factory::party::create_party(db).await?;

    let foreign = TokenService::new("another-secret", 3600).issue(party.id)?;
    let tokens = tokens();
    let headers = bearer(&foreign);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a party that has since been deleted.
///
/// Expected: Err(AuthError::PartyNotFound)
#[tokio::test]
async fn denies_token_of_missing_party() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer(&tokens.issue(404)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PartyNotFound(404)))
    ));

    Ok(())
}

/// Tests a valid token for a locked party.
///
/// Expected: Err(AuthError::AccountLocked)
#[tokio::test]
async fn denies_locked_party() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let party = factory::party::PartyFactory::new(db)
        .locked("unlock-me")
        .build()
        .await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(party.id)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountLocked(_)))
    ));

    Ok(())
}

/// Tests an empty permission list with a valid token.
///
/// Expected: Ok(Party) for any authenticated party
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let party = factory::party::create_party(db).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(party.id)?);

    let returned = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(returned.id, party.id);
    assert!(returned.permissions.is_empty());

    Ok(())
}

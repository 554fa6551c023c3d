use super::*;

/// Tests unlocking a locked account with its token.
///
/// Expected: Ok, and signin succeeds afterwards
#[tokio::test]
async fn unlocks_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::PartyFactory::new(db)
        .locked("unlock-me")
        .build()
        .await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    service.unlock("unlock-me").await?;

    assert!(service.signin(&party.email, DEFAULT_PASSWORD).await.is_ok());

    Ok(())
}

/// Expected: Err(UnknownToken) when no party holds the token
#[tokio::test]
async fn rejects_unknown_unlock_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let result = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS)
        .unlock("missing")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownToken))
    ));

    Ok(())
}

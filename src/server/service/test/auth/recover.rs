use super::*;

/// Tests the forgot then recover flow.
///
/// Expected: the recovery token is consumed and the new password works
#[tokio::test]
async fn recovers_password_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    service.forgot(&party.email).await?;

    let token = Party::find_by_id(party.id)
        .one(db)
        .await?
        .and_then(|p| p.recovery_token)
        .unwrap();

    service.recover(&token, "new-password-1").await?;

    let stored = Party::find_by_id(party.id).one(db).await?.unwrap();
    assert!(stored.recovery_token.is_none());
    assert!(service.signin(&party.email, "new-password-1").await.is_ok());

    Ok(())
}

/// Expected: Ok for an unknown email, revealing nothing
#[tokio::test]
async fn forgot_ignores_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let result = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS)
        .forgot("nobody@example.org")
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expected: Err(BadRequest) before the token is even looked up
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::party::PartyFactory::new(db)
        .recovery_token("recover-me")
        .build()
        .await?;

    let tokens = tokens();
    let result = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS)
        .recover("recover-me", "short")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

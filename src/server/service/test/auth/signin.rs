use super::*;

/// Tests signing in with the right password.
///
/// Expected: Ok with the party and a token that verifies to its id
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::PartyFactory::new(db)
        .email("operator@example.org")
        .build()
        .await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);
    let (signed_in, token) = service
        .signin(" Operator@Example.org ", DEFAULT_PASSWORD)
        .await?;

    assert_eq!(signed_in.id, party.id);
    assert_eq!(tokens.verify(&token).unwrap(), party.id);

    Ok(())
}

/// Expected: Err(InvalidCredentials) for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let result = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS)
        .signin("nobody@example.org", DEFAULT_PASSWORD)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that repeated wrong passwords lock the account.
///
/// Expected: InvalidCredentials until the limit, then AccountLocked even with
/// the right password
#[tokio::test]
async fn locks_after_repeated_failures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    for _ in 1..MAX_FAILED_ATTEMPTS {
        let result = service.signin(&party.email, "wrong-password").await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    let result = service.signin(&party.email, "wrong-password").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountLocked(_)))
    ));

    let result = service.signin(&party.email, DEFAULT_PASSWORD).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountLocked(_)))
    ));

    let stored = Party::find_by_id(party.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_attempts, MAX_FAILED_ATTEMPTS);
    assert!(stored.locked_at.is_some());
    assert!(stored.unlock_token.is_some());

    Ok(())
}

/// Tests that a successful signin clears earlier failures.
///
/// Expected: failed_attempts back to 0
#[tokio::test]
async fn resets_failed_attempts_on_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    assert!(service.signin(&party.email, "wrong-password").await.is_err());
    service.signin(&party.email, DEFAULT_PASSWORD).await?;

    let stored = Party::find_by_id(party.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_attempts, 0);

    Ok(())
}

/// Expected: Err(AccountNotConfirmed) for an unconfirmed account
#[tokio::test]
async fn rejects_unconfirmed_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::PartyFactory::new(db)
        .confirmed(false)
        .confirmation_token("confirm-me")
        .build()
        .await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    let result = service.signin(&party.email, DEFAULT_PASSWORD).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotConfirmed(_)))
    ));

    service.confirm("confirm-me").await?;
    assert!(service.signin(&party.email, DEFAULT_PASSWORD).await.is_ok());

    Ok(())
}

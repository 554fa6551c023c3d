use super::*;

/// Expected: Ok with the current password, new password accepted at signin
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let service = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS);

    service
        .change(party.id, DEFAULT_PASSWORD, "another-password")
        .await?;

    assert!(service.signin(&party.email, "another-password").await.is_ok());

    Ok(())
}

/// Expected: Err(InvalidCredentials) when the current password is wrong
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let tokens = tokens();
    let result = AuthService::new(db, &tokens, MAX_FAILED_ATTEMPTS)
        .change(party.id, "not-my-password", "another-password")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

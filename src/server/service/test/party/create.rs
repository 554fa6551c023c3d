use super::*;

fn new_party(name: &str, jurisdiction_id: Option<i32>) -> CreatePartyDto {
    CreatePartyDto {
        name: name.to_string(),
        email: "clerk@example.com".to_string(),
        phone: None,
        password: "long-enough-password".to_string(),
        role_id: None,
        jurisdiction_id,
    }
}

/// Expected: Err(BadRequest) for a blank name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PartyService::new(db).create(new_party("   ", None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) rather than a database error for a missing jurisdiction
#[tokio::test]
async fn rejects_unknown_jurisdiction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PartyService::new(db);

    let result = service.create(new_party("Clerk", Some(5))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let party = factory::party::create_party(db).await?;
    let result = service
        .update(UpdatePartyParam {
            id: party.id,
            name: None,
            email: None,
            phone: None,
            role_id: None,
            jurisdiction_id: Some(5),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

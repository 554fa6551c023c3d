use super::*;

fn new_jurisdiction(code: &str, name: &str) -> CreateJurisdictionParam {
    CreateJurisdictionParam {
        parent_id: None,
        code: code.to_string(),
        name: name.to_string(),
        phone: None,
        email: None,
        address: None,
        about: None,
        color: None,
    }
}

/// Expected: Err(BadRequest) when either code or name is blank
#[tokio::test]
async fn rejects_blank_code_or_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = JurisdictionService::new(db);

    let result = service.create(new_jurisdiction(" ", "Ilala")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.create(new_jurisdiction("ILA", "\n")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let existing = factory::jurisdiction::create_jurisdiction(db).await?;
    let result = service
        .update(UpdateJurisdictionParam {
            id: existing.id,
            name: Some(String::new()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

use super::*;

fn new_group(code: &str, name: &str) -> CreateServiceGroupParam {
    CreateServiceGroupParam {
        jurisdiction_id: None,
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        color: None,
    }
}

/// Expected: Err(BadRequest) when either code or name is blank
#[tokio::test]
async fn rejects_blank_code_or_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServiceGroupService::new(db);

    let result = service.create(new_group("  ", "Water")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.create(new_group("WTR", "")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let group = service.create(new_group("WTR", "Water")).await?;
    let result = service
        .update(UpdateServiceGroupParam {
            id: group.id,
            code: Some(" ".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) for a missing jurisdiction, Ok for an existing one
#[tokio::test]
async fn checks_jurisdiction_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServiceGroupService::new(db);

    let result = service
        .create(CreateServiceGroupParam {
            jurisdiction_id: Some(7),
            ..new_group("WTR", "Water")
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let jurisdiction = factory::jurisdiction::create_jurisdiction(db).await?;
    let group = service
        .create(CreateServiceGroupParam {
            jurisdiction_id: Some(jurisdiction.id),
            ..new_group("WTR", "Water")
        })
        .await?;
    assert_eq!(group.jurisdiction_id, Some(jurisdiction.id));

    let result = service
        .update(UpdateServiceGroupParam {
            id: group.id,
            jurisdiction_id: Some(jurisdiction.id + 100),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

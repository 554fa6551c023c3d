use super::*;

fn new_service(group_id: i32, code: &str, name: &str) -> CreateServiceParam {
    CreateServiceParam {
        jurisdiction_id: None,
        group_id,
        priority_id: None,
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        color: None,
        is_external: false,
    }
}

/// Expected: Err(BadRequest) when either code or name is blank
#[tokio::test]
async fn rejects_blank_code_or_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::service_group::create_service_group(db).await?;
    let service = ServiceService::new(db);

    let result = service.create(new_service(group.id, "", "Leakage")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.create(new_service(group.id, "LKG", "  ")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let created = service.create(new_service(group.id, "LKG", "Leakage")).await?;
    let result = service
        .update(UpdateServiceParam {
            id: created.service.id,
            name: Some(" ".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) rather than a database error for a missing jurisdiction
#[tokio::test]
async fn rejects_unknown_jurisdiction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::service_group::create_service_group(db).await?;
    let service = ServiceService::new(db);

    let result = service
        .create(CreateServiceParam {
            jurisdiction_id: Some(99),
            ..new_service(group.id, "LKG", "Leakage")
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let created = service.create(new_service(group.id, "LKG", "Leakage")).await?;
    let result = service
        .update(UpdateServiceParam {
            id: created.service.id,
            jurisdiction_id: Some(99),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

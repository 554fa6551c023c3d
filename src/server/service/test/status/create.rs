use super::*;

fn new_status(name: &str, jurisdiction_id: Option<i32>) -> CreateStatusParam {
    CreateStatusParam {
        jurisdiction_id,
        name: name.to_string(),
        weight: 1,
        color: None,
    }
}

/// Expected: Ok with the trimmed name and a generated color
#[tokio::test]
async fn creates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let status = StatusService::new(db).create(new_status("Open", None)).await?;

    assert_eq!(status.name, "Open");
    assert!(status.color.starts_with('#'));

    Ok(())
}

/// Expected: Err(BadRequest) for a blank name on create and update
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StatusService::new(db);

    let result = service.create(new_status(" ", None)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let open = factory::status::StatusFactory::new(db).name("Open").build().await?;
    let result = service
        .update(UpdateStatusParam {
            id: open.id,
            name: Some("\t".to_string()),
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

    let service = StatusService::new(db);

    let result = service.create(new_status("Open", Some(42))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let open = factory::status::StatusFactory::new(db).name("Open").build().await?;
    let result = service
        .update(UpdateStatusParam {
            id: open.id,
            jurisdiction_id: Some(42),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

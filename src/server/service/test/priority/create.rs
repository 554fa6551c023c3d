use super::*;

/// Expected: Err(Conflict) for a name already taken
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::priority::PriorityFactory::new(db)
        .name("High")
        .build()
        .await?;

    let result = PriorityService::new(db)
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "High".to_string(),
            weight: 1,
            color: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests renaming a priority onto another priority's name.
///
/// Expected: Err(Conflict), while keeping its own name is fine
#[tokio::test]
async fn rejects_rename_onto_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::priority::PriorityFactory::new(db)
        .name("High")
        .build()
        .await?;
    let low = factory::priority::PriorityFactory::new(db)
        .name("Low")
        .build()
        .await?;

    let service = PriorityService::new(db);

    let result = service
        .update(UpdatePriorityParam {
            id: low.id,
            name: Some("High".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let same = service
        .update(UpdatePriorityParam {
            id: low.id,
            name: Some("Low".to_string()),
            weight: Some(4),
            ..Default::default()
        })
        .await?
        .unwrap();
    assert_eq!(same.weight, 4);

    Ok(())
}

/// Expected: Err(BadRequest) for a name that is blank once trimmed
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PriorityService::new(db);

    let result = service
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "   ".to_string(),
            weight: 1,
            color: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let low = factory::priority::PriorityFactory::new(db)
        .name("Low")
        .build()
        .await?;
    let result = service
        .update(UpdatePriorityParam {
            id: low.id,
            name: Some(String::new()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) for a jurisdiction that doesn't exist, on create and update
#[tokio::test]
async fn rejects_unknown_jurisdiction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PriorityService::new(db);

    let result = service
        .create(CreatePriorityParam {
            jurisdiction_id: Some(999),
            name: "High".to_string(),
            weight: 1,
            color: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let low = factory::priority::PriorityFactory::new(db)
        .name("Low")
        .build()
        .await?;
    let result = service
        .update(UpdatePriorityParam {
            id: low.id,
            jurisdiction_id: Some(999),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let jurisdiction = factory::jurisdiction::create_jurisdiction(db).await?;
    let updated = service
        .update(UpdatePriorityParam {
            id: low.id,
            jurisdiction_id: Some(jurisdiction.id),
            ..Default::default()
        })
        .await?;
    assert!(updated.is_some());

    Ok(())
}

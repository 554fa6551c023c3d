use super::*;

/// Tests creating a priority without a color.
///
/// Verifies that the repository assigns a random `#RRGGBB` color when none is
/// supplied.
///
/// Expected: Ok with a hex color set
#[tokio::test]
async fn assigns_random_color_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriorityRepository::new(db);
    let priority = repo
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "Normal".to_string(),
            weight: 0,
            color: None,
        })
        .await?;

    assert_eq!(priority.name, "Normal");
    assert!(is_hex_color(&priority.color));

    Ok(())
}

/// Tests creating a priority with a blank color.
///
/// Expected: Ok with the blank value replaced by a hex color
#[tokio::test]
async fn replaces_blank_color() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriorityRepository::new(db);
    let priority = repo
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "Low".to_string(),
            weight: 10,
            color: Some("  ".to_string()),
        })
        .await?;

    assert!(is_hex_color(&priority.color));

    Ok(())
}

/// Tests that a supplied color is stored as given.
///
/// Expected: Ok with the supplied color
#[tokio::test]
async fn keeps_supplied_color() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriorityRepository::new(db);
    let priority = repo
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "High".to_string(),
            weight: -5,
            color: Some("#FF0000".to_string()),
        })
        .await?;

    assert_eq!(priority.color, "#FF0000");
    assert_eq!(priority.weight, -5);

    Ok(())
}

/// Tests that priority names are unique at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::priority::PriorityFactory::new(db)
        .name("Urgent")
        .build()
        .await?;

    let repo = PriorityRepository::new(db);
    let result = repo
        .create(CreatePriorityParam {
            jurisdiction_id: None,
            name: "Urgent".to_string(),
            weight: 0,
            color: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

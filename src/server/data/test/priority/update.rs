use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change and a blank color is replaced by a
/// random one.
///
/// Expected: Ok with name kept, weight changed, hex color
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let priority = factory::priority::PriorityFactory::new(db)
        .name("Normal")
        .weight(0)
        .color("#00FF00")
        .build()
        .await?;

    let repo = PriorityRepository::new(db);
    let updated = repo
        .update(UpdatePriorityParam {
            id: priority.id,
            weight: Some(7),
            color: Some(String::new()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Normal");
    assert_eq!(updated.weight, 7);
    assert_ne!(updated.color, "");
    assert!(is_hex_color(&updated.color));

    Ok(())
}

/// Tests updating a priority that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriorityRepository::new(db);
    let result = repo
        .update(UpdatePriorityParam {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

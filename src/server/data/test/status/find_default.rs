use super::*;

/// Tests that the default status is the one with the lowest weight.
///
/// Expected: Ok(Some) with the minimum-weight status
#[tokio::test]
async fn returns_lowest_weight_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Status).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::status::StatusFactory::new(db)
        .name("Closed")
        .weight(100)
        .build()
        .await?;
    let open = factory::status::StatusFactory::new(db)
        .name("Open")
        .weight(-100)
        .build()
        .await?;

    let repo = StatusRepository::new(db);
    let default = repo.find_default().await?;

    assert_eq!(default.map(|s| s.name), Some(open.name));

    Ok(())
}

/// Expected: Ok(None) when no status exists
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Status).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusRepository::new(db);

    assert!(repo.find_default().await?.is_none());

    Ok(())
}

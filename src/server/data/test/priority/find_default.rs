use super::*;

/// Tests that the default priority is the one with the lowest weight.
///
/// Expected: Ok(Some) with the minimum-weight priority
#[tokio::test]
async fn returns_lowest_weight_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::priority::PriorityFactory::new(db)
        .name("Low")
        .weight(10)
        .build()
        .await?;
    let urgent = factory::priority::PriorityFactory::new(db)
        .name("Urgent")
        .weight(-10)
        .build()
        .await?;
    factory::priority::PriorityFactory::new(db)
        .name("Normal")
        .weight(0)
        .build()
        .await?;

    let repo = PriorityRepository::new(db);
    let default = repo.find_default().await?;

    assert_eq!(default.map(|p| p.id), Some(urgent.id));

    Ok(())
}

/// Tests that equal weights resolve to the earliest created priority.
///
/// Expected: Ok(Some) with the lower id
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::priority::PriorityFactory::new(db)
        .weight(1)
        .build()
        .await?;
    factory::priority::PriorityFactory::new(db)
        .weight(1)
        .build()
        .await?;

    let repo = PriorityRepository::new(db);
    let default = repo.find_default().await?;

    assert_eq!(default.map(|p| p.id), Some(first.id));

    Ok(())
}

/// Tests the default lookup on an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriorityRepository::new(db);

    assert!(repo.find_default().await?.is_none());

    Ok(())
}

use super::*;

/// Tests that pages are ordered by weight and report totals.
///
/// Expected: Ok with the lightest priorities on the first page
#[tokio::test]
async fn orders_by_weight_and_counts_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for weight in [5, -1, 3] {
        factory::priority::PriorityFactory::new(db)
            .weight(weight)
            .build()
            .await?;
    }

    let repo = PriorityRepository::new(db);
    let page = repo
        .get_paginated(&PageParam::new(Some(1), Some(2), None))
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.pages(), 2);
    let weights: Vec<i32> = page.items.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![-1, 3]);

    let second = repo
        .get_paginated(&PageParam::new(Some(2), Some(2), None))
        .await?;
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].weight, 5);

    Ok(())
}

/// Tests searching priorities by name.
///
/// Expected: Ok with only matching priorities
#[tokio::test]
async fn filters_by_search_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Priority).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::priority::PriorityFactory::new(db)
        .name("Critical")
        .build()
        .await?;
    factory::priority::PriorityFactory::new(db)
        .name("Low")
        .build()
        .await?;

    let repo = PriorityRepository::new(db);
    let page = repo
        .get_paginated(&PageParam::new(None, None, Some("crit".to_string())))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Critical");

    Ok(())
}

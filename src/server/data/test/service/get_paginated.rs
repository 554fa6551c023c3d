use super::*;

/// Tests searching services by code.
///
/// Expected: Ok with the service whose code matches
#[tokio::test]
async fn searches_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::service_group::create_service_group(db).await?;
    factory::service::ServiceFactory::new(db, group.id)
        .code("WTR")
        .name("Water Leakage")
        .build()
        .await?;
    factory::service::ServiceFactory::new(db, group.id)
        .code("BIL")
        .name("Billing")
        .build()
        .await?;

    let repo = ServiceRepository::new(db);
    let page = repo
        .get_paginated(&PageParam::new(None, None, Some("WTR".to_string())))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].service.name, "Water Leakage");
    assert!(page.items[0].group.is_some());

    Ok(())
}

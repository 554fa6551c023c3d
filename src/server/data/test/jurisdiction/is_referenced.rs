use super::*;

/// Expected: true for a jurisdiction with children, false for a leaf
#[tokio::test]
async fn detects_child_jurisdictions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::jurisdiction::create_jurisdiction(db).await?;
    let child = factory::jurisdiction::JurisdictionFactory::new(db)
        .parent_id(parent.id)
        .build()
        .await?;

    let repo = JurisdictionRepository::new(db);

    assert!(repo.is_referenced(parent.id).await?);
    assert!(!repo.is_referenced(child.id).await?);

    Ok(())
}

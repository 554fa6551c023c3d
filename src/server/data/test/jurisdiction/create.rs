use super::*;

/// Tests creating a jurisdiction under a parent without a color.
///
/// Expected: Ok with parent kept and a random color assigned
#[tokio::test]
async fn creates_child_jurisdiction_with_color() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::jurisdiction::create_jurisdiction(db).await?;

    let repo = JurisdictionRepository::new(db);
    let child = repo
        .create(CreateJurisdictionParam {
            parent_id: Some(parent.id),
            code: "ILA".to_string(),
            name: "Ilala".to_string(),
            phone: None,
            email: None,
            address: None,
            about: None,
            color: None,
        })
        .await?;

    assert_eq!(child.parent_id, Some(parent.id));
    assert!(child.color.starts_with('#'));

    let conflict = repo.find_by_code_or_name("XXX", "Ilala").await?;
    assert_eq!(conflict.map(|j| j.id), Some(child.id));

    Ok(())
}

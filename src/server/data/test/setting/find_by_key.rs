use super::*;

/// Tests looking up and updating a setting by key.
///
/// Expected: Ok with the stored value, then the updated one
#[tokio::test]
async fn finds_and_updates_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Setting).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "ttr_target_hours", "48").await?;

    let repo = SettingRepository::new(db);
    let setting = repo.find_by_key("ttr_target_hours").await?.unwrap();
    assert_eq!(setting.value, "48");

    let updated = repo
        .update(UpdateSettingParam {
            id: setting.id,
            value: Some("24".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(updated.value, "24");
    assert!(repo.find_by_key("missing").await?.is_none());

    Ok(())
}

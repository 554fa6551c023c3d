use super::*;

/// Tests creating a status without a color.
///
/// Expected: Ok with a `#RRGGBB` color assigned
#[tokio::test]
async fn assigns_random_color_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Jurisdiction).with_table(Status).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusRepository::new(db);
    let status = repo
        .create(CreateStatusParam {
            jurisdiction_id: None,
            name: "Open".to_string(),
            weight: 0,
            color: None,
        })
        .await?;

    assert_eq!(status.color.len(), 7);
    assert!(status.color.starts_with('#'));

    Ok(())
}

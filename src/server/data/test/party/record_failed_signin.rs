use super::*;

/// Tests that failures below the threshold only count.
///
/// Expected: Ok with failed_attempts incremented and no lock
#[tokio::test]
async fn counts_failures_below_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let repo = PartyRepository::new(db);
    let updated = repo
        .record_failed_signin(party.id, 3, "unlock-me".to_string())
        .await?;

    assert_eq!(updated.failed_attempts, 1);
    assert!(updated.locked_at.is_none());
    assert!(updated.unlock_token.is_none());

    Ok(())
}

/// Tests that reaching the threshold locks the account.
///
/// Expected: Ok with locked_at and unlock_token set on the third failure
#[tokio::test]
async fn locks_when_threshold_reached() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::create_party(db).await?;

    let repo = PartyRepository::new(db);
    let mut last = None;
    for _ in 0..3 {
        last = Some(
            repo.record_failed_signin(party.id, 3, "unlock-me".to_string())
                .await?,
        );
    }
    let last = last.unwrap();

    assert_eq!(last.failed_attempts, 3);
    assert!(last.locked_at.is_some());
    assert_eq!(last.unlock_token.as_deref(), Some("unlock-me"));

    Ok(())
}

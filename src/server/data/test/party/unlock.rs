use super::*;

/// Tests unlocking a locked account.
///
/// Expected: Ok with lock, token and counter cleared
#[tokio::test]
async fn clears_lock_and_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let party = factory::party::PartyFactory::new(db)
        .locked("token-123")
        .build()
        .await?;

    let repo = PartyRepository::new(db);
    let found = repo.find_by_unlock_token("token-123").await?.unwrap();
    assert_eq!(found.id, party.id);

    repo.unlock(party.id).await?;

    let unlocked = repo.find_entity_by_id(party.id).await?.unwrap();
    assert!(unlocked.locked_at.is_none());
    assert!(unlocked.unlock_token.is_none());
    assert_eq!(unlocked.failed_attempts, 0);

    Ok(())
}

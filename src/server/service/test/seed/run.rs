use super::*;

/// Tests seeding twice.
///
/// Expected: one permission per resource and action, one administrator role
/// holding all of them, one administrator party
#[tokio::test]
async fn seeds_idempotently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seed = SeedService::new(db);
    seed.run(Some("Admin@Example.org"), Some("administrator"))
        .await?;
    seed.run(Some("admin@example.org"), Some("administrator"))
        .await?;

    let expected = (Resource::ALL.len() * Action::ALL.len()) as u64;
    assert_eq!(Permission::find().count(db).await?, expected);
    assert_eq!(RolePermission::find().count(db).await?, expected);
    assert_eq!(Role::find().count(db).await?, 1);

    let parties = Party::find().all(db).await?;
    assert_eq!(parties.len(), 1);
    assert_eq!(parties[0].email, "admin@example.org");
    assert!(parties[0].confirmed_at.is_some());

    let role = seed.administrator_role().await?;
    assert_eq!(role.name, ADMINISTRATOR_ROLE);
    assert!(role.permissions.contains(&"servicerequests:create".to_string()));

    Ok(())
}

/// Expected: no party is created without configured credentials
#[tokio::test]
async fn skips_admin_without_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SeedService::new(db).run(None, None).await?;

    assert_eq!(Party::find().count(db).await?, 0);

    Ok(())
}

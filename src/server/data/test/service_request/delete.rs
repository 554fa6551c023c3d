use super::*;

/// Tests that deleting a request removes its comments.
///
/// Expected: Ok with no request and no comments left
#[tokio::test]
async fn deletes_request_with_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    factory::comment::create_comment(db, request.id, None).await?;
    factory::comment::create_comment(db, request.id, None).await?;

    let repo = ServiceRequestRepository::new(db);
    repo.delete(request.id).await?;

    assert!(!repo.exists(request.id).await?);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

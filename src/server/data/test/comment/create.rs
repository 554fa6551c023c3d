use super::*;

/// Tests that a new comment carries its commentator's name.
///
/// Expected: Ok with the commentator reference resolved
#[tokio::test]
async fn resolves_commentator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let party = factory::party::PartyFactory::new(db)
        .name("Operator One")
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParam {
            service_request_id: request.id,
            commentator_id: Some(party.id),
            content: "Called back the reporter".to_string(),
        })
        .await?;

    assert_eq!(comment.service_request_id, request.id);
    assert_eq!(
        comment.commentator.map(|c| c.name),
        Some("Operator One".to_string())
    );

    Ok(())
}

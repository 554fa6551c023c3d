use super::*;

/// Expected: Err(NotFound) when the request doesn't exist
#[tokio::test]
async fn rejects_comment_on_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db)
        .create(CreateCommentParam {
            service_request_id: 404,
            commentator_id: None,
            content: "Crew dispatched".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: Ok with the commentator resolved
#[tokio::test]
async fn comments_on_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let party = factory::party::create_party(db).await?;

    let comment = CommentService::new(db)
        .create(CreateCommentParam {
            service_request_id: request.id,
            commentator_id: Some(party.id),
            content: "Crew dispatched".to_string(),
        })
        .await?;

    assert_eq!(comment.commentator.map(|c| c.name), Some(party.name));

    Ok(())
}

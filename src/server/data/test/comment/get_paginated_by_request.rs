use super::*;

/// Tests listing only the comments of one request, oldest first.
///
/// Expected: Ok with the two comments of the first request in insertion order
#[tokio::test]
async fn lists_comments_of_request_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let other = factory::service_request::create_service_request(
        db,
        service.id,
        request.priority_id,
        request.status_id,
    )
    .await?;

    let first = factory::comment::create_comment(db, request.id, None).await?;
    let second = factory::comment::create_comment(db, request.id, None).await?;
    factory::comment::create_comment(db, other.id, None).await?;

    let repo = CommentRepository::new(db);
    let page = repo
        .get_paginated_by_request(request.id, &PageParam::default())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

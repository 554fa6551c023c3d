use super::*;

/// Tests listing requests newest first.
///
/// Expected: Ok with the most recently created request first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let old = factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .created_at(Utc::now() - TimeDelta::days(2))
        .build()
        .await?;
    let new = factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .build()
        .await?;

    let repo = ServiceRequestRepository::new(db);
    let page = repo
        .get_paginated(&PageParam::default(), Condition::all())
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);

    Ok(())
}

/// Tests filtering with a prepared report query and search text.
///
/// Expected: Ok with only the request of the filtered service matching the search
#[tokio::test]
async fn applies_report_condition_and_search() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let other_service = factory::service::create_service(db, group.id).await?;

    let wanted = factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .reporter_name("Amina Hassan")
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .reporter_name("Peter Mrema")
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, other_service.id, priority.id, status.id)
        .reporter_name("Amina Said")
        .build()
        .await?;

    let query = prepare_query(
        ReportFilter {
            services: vec![service.id],
            ..Default::default()
        },
        Utc::now(),
    );

    let repo = ServiceRequestRepository::new(db);
    let page = repo
        .get_paginated(
            &PageParam::new(None, None, Some("Amina".to_string())),
            query.into_condition(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, wanted.id);

    Ok(())
}

/// Tests that the date range excludes requests created before the start day.
///
/// Expected: Ok with only the recent request
#[tokio::test]
async fn excludes_requests_outside_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .created_at(Utc::now() - TimeDelta::days(30))
        .build()
        .await?;
    let recent = factory::service_request::create_service_request(db, service.id, priority.id, status.id)
        .await?;

    let now = Utc::now();
    let query = prepare_query(
        ReportFilter {
            started_at: Some(now - TimeDelta::days(1)),
            ended_at: Some(now),
            ..Default::default()
        },
        now,
    );

    let repo = ServiceRequestRepository::new(db);
    let requests = repo.find_all(query.into_condition()).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, recent.id);

    Ok(())
}

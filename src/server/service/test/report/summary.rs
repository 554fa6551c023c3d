use super::*;

/// Tests that the date filter excludes requests created before the range.
///
/// Expected: only the request created today is counted
#[tokio::test]
async fn counts_requests_within_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;
    factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .created_at(Utc::now() - TimeDelta::days(10))
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
        .resolved_at(Utc::now())
        .build()
        .await?;

    let summary = ReportService::new(db)
        .summary(ReportFilter {
            started_at: Some(Utc::now()),
            ended_at: Some(Utc::now()),
            ..Default::default()
        })
        .await?;

    assert_eq!(summary.total, 1);
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.pending, 0);

    Ok(())
}

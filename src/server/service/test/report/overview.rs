use super::*;

/// Tests the overview and standings against stored requests.
///
/// Expected: breakdowns named after stored records
#[tokio::test]
async fn names_breakdowns_after_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (service, _request) = factory::helpers::create_service_request_with_dependencies(db).await?;

    let reports = ReportService::new(db);
    let overview = reports.overview(ReportFilter::default()).await?;

    assert_eq!(overview.summary.total, 1);
    assert_eq!(overview.services.items[0].name, service.name);
    assert_eq!(overview.services.items[0].color.as_ref(), Some(&service.color));

    let standings = reports.standings(ReportFilter::default()).await?;
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].count, 1);
    assert!(standings[0].status.is_some());

    Ok(())
}

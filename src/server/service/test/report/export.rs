use super::*;

/// Expected: a header and one line per matching request
#[tokio::test]
async fn exports_matching_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    let (_, other) = factory::helpers::create_service_request_with_dependencies(db).await?;

    let bytes = ReportService::new(db)
        .export(ReportFilter {
            services: vec![request.service_id],
            ..Default::default()
        })
        .await?;
    let text = String::from_utf8(bytes).unwrap();

    assert_eq!(text.lines().count(), 2);
    assert!(text.contains(&request.code));
    assert!(!text.contains(&other.code));

    Ok(())
}

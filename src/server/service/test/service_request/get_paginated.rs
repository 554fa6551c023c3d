use super::*;

/// Tests filtering the request list by service.
///
/// Expected: only requests of the filtered service, with references resolved
#[tokio::test]
async fn filters_by_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (service, request) = factory::helpers::create_service_request_with_dependencies(db).await?;
    factory::helpers::create_service_request_with_dependencies(db).await?;

    let service_layer = ServiceRequestService::new(db);
    let page = service_layer
        .get_paginated(
            &PageParam::default(),
            ReportFilter {
                services: vec![service.id],
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, request.id);

    let refs = service_layer.references(&page.items).await?;
    let dto = page.into_dto(&refs);
    assert_eq!(
        dto.servicerequests[0].service.as_ref().map(|s| s.name.clone()),
        Some(service.name)
    );

    Ok(())
}

use super::*;

/// Tests that group, jurisdiction and priority come from the service.
///
/// Expected: Ok with the service's group and priority and the default status
#[tokio::test]
async fn fills_defaults_from_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jurisdiction = factory::jurisdiction::create_jurisdiction(db).await?;
    let group = factory::service_group::create_service_group(db).await?;
    let priority = factory::priority::PriorityFactory::new(db)
        .weight(5)
        .build()
        .await?;
    factory::priority::PriorityFactory::new(db)
        .weight(0)
        .build()
        .await?;
    let status = factory::status::create_status(db).await?;
    let service = factory::service::ServiceFactory::new(db, group.id)
        .jurisdiction_id(jurisdiction.id)
        .priority_id(priority.id)
        .code("WTR")
        .build()
        .await?;

    let request = ServiceRequestService::new(db)
        .create(new_request(service.id), None)
        .await?;

    assert_eq!(request.group_id, Some(group.id));
    assert_eq!(request.jurisdiction_id, Some(jurisdiction.id));
    assert_eq!(request.priority_id, priority.id);
    assert_eq!(request.status_id, status.id);
    assert!(request.code.starts_with(&code_prefix("WTR", Utc::now())));

    Ok(())
}

/// Tests falling back to the lowest-weight priority and status.
///
/// Expected: Ok with the minimum weight priority and status
#[tokio::test]
async fn falls_back_to_default_priority_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::service_group::create_service_group(db).await?;
    let service = factory::service::create_service(db, group.id).await?;
    factory::priority::PriorityFactory::new(db)
        .weight(10)
        .build()
        .await?;
    let urgent = factory::priority::PriorityFactory::new(db)
        .weight(-1)
        .build()
        .await?;
    factory::status::StatusFactory::new(db)
        .weight(3)
        .build()
        .await?;
    let open = factory::status::StatusFactory::new(db)
        .weight(1)
        .build()
        .await?;

    let request = ServiceRequestService::new(db)
        .create(new_request(service.id), Some(7))
        .await?;

    assert_eq!(request.priority_id, urgent.id);
    assert_eq!(request.status_id, open.id);
    assert_eq!(request.operator_id, Some(7));

    Ok(())
}

/// Expected: Err(BadRequest) when no status exists to default to
#[tokio::test]
async fn rejects_missing_default_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::service_group::create_service_group(db).await?;
    let priority = factory::priority::create_priority(db).await?;
    let service = factory::service::ServiceFactory::new(db, group.id)
        .priority_id(priority.id)
        .build()
        .await?;

    let result = ServiceRequestService::new(db)
        .create(new_request(service.id), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) for an unknown service
#[tokio::test]
async fn rejects_unknown_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServiceRequestService::new(db)
        .create(new_request(999), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that codes count up per service within the year.
///
/// Expected: sequences 1 and 2 for the first service, 1 for another
#[tokio::test]
async fn numbers_codes_per_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, _priority, _status, water) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let billing = factory::service::ServiceFactory::new(db, water.group_id)
        .priority_id(water.priority_id.unwrap())
        .code("BIL")
        .build()
        .await?;

    let service = ServiceRequestService::new(db);
    let first = service.create(new_request(water.id), None).await?;
    let second = service.create(new_request(water.id), None).await?;
    let other = service.create(new_request(billing.id), None).await?;

    let year = Utc::now().year() % 100;
    assert_eq!(first.code, format!("{}{:02}00001", water.code, year));
    assert_eq!(second.code, format!("{}{:02}00002", water.code, year));
    assert_eq!(other.code, format!("BIL{:02}00001", year));

    Ok(())
}

/// Tests a service whose code is another service's code followed by the year.
///
/// Expected: `W` starts at sequence 1 even after `W<yy>` has logged a request
#[tokio::test]
async fn keeps_overlapping_service_codes_apart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = Utc::now().year() % 100;
    let (_group, _priority, _status, long) =
        factory::helpers::create_service_with_dependencies(db).await?;
    let long = factory::service::ServiceFactory::new(db, long.group_id)
        .priority_id(long.priority_id.unwrap())
        .code(format!("W{:02}", year))
        .build()
        .await?;
    let short = factory::service::ServiceFactory::new(db, long.group_id)
        .priority_id(long.priority_id.unwrap())
        .code("W")
        .build()
        .await?;

    let service = ServiceRequestService::new(db);
    let long_request = service.create(new_request(long.id), None).await?;
    let short_request = service.create(new_request(short.id), None).await?;
    let short_again = service.create(new_request(short.id), None).await?;

    assert_eq!(long_request.code, format!("W{:02}{:02}00001", year, year));
    assert_eq!(short_request.code, format!("W{:02}00001", year));
    assert_eq!(short_again.code, format!("W{:02}00002", year));

    Ok(())
}

/// Expected: Err(BadRequest) when the reporter phone is blank
#[tokio::test]
async fn requires_reporter_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, _priority, _status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;

    let mut new = new_request(service.id);
    new.reporter.phone = String::new();

    let result = ServiceRequestService::new(db).create(new, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

use super::*;

/// Tests creating a service request from resolved values.
///
/// Expected: Ok with the request stored unresolved and its method kept
#[tokio::test]
async fn creates_unresolved_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, priority, status, service) =
        factory::helpers::create_service_with_dependencies(db).await?;

    let repo = ServiceRequestRepository::new(db);
    let request = repo
        .create(CreateServiceRequestParam {
            code: "WTR2600001".to_string(),
            jurisdiction_id: None,
            group_id: Some(group.id),
            service_id: service.id,
            priority_id: priority.id,
            status_id: status.id,
            reporter: reporter(),
            description: "No water since morning".to_string(),
            address: Some("Block 7".to_string()),
            method: ContactMethod::WalkIn,
            workspace: Some("Front Desk".to_string()),
            operator_id: None,
            assignee_id: None,
            call_started_at: None,
            call_ended_at: None,
        })
        .await?;

    assert_eq!(request.code, "WTR2600001");
    assert_eq!(request.method, ContactMethod::WalkIn);
    assert_eq!(request.reporter.account.as_deref(), Some("ACC-1"));
    assert!(!request.is_resolved());

    Ok(())
}

//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (names, codes, emails) distinct across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a service along with its group, priority and a status.
///
/// # Returns
/// - `Ok((group, priority, status, service))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_service_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::service_group::Model,
        entity::priority::Model,
        entity::status::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let group = crate::factory::service_group::create_service_group(db).await?;
    let priority = crate::factory::priority::create_priority(db).await?;
    let status = crate::factory::status::create_status(db).await?;
    let service = crate::factory::service::ServiceFactory::new(db, group.id)
        .priority_id(priority.id)
        .build()
        .await?;

    Ok((group, priority, status, service))
}

/// Creates a service request and every row it references.
///
/// # Returns
/// - `Ok((service, request))` - The service and the request logged against it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_service_request_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::service::Model, entity::service_request::Model), DbErr> {
    let (group, priority, status, service) = create_service_with_dependencies(db).await?;
    let request =
        crate::factory::service_request::ServiceRequestFactory::new(db, service.id, priority.id, status.id)
            .group_id(group.id)
            .build()
            .await?;

    Ok((service, request))
}

//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database, so referenced rows
//! must exist first; `helpers` creates common dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let priority = factory::priority::create_priority(&db).await?;
//!
//!     // Create with all dependencies
//!     let (group, priority, status, service) =
//!         factory::helpers::create_service_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let priority = factory::priority::PriorityFactory::new(&db)
//!     .name("Critical")
//!     .weight(-10)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod helpers;
pub mod jurisdiction;
pub mod party;
pub mod permission;
pub mod priority;
pub mod role;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;

pub use comment::create_comment;
pub use jurisdiction::create_jurisdiction;
pub use party::create_party;
pub use permission::create_permission;
pub use priority::create_priority;
pub use role::create_role;
pub use service::create_service;
pub use service_group::create_service_group;
pub use service_request::create_service_request;
pub use setting::create_setting;
pub use status::create_status;

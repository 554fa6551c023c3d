//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of pure logic such as report aggregation or DTO conversion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let request = fixture::service_request::entity();
//!
//! let resolved = fixture::service_request::entity_builder()
//!     .status_id(2)
//!     .resolved_after_hours(3)
//!     .build();
//! ```

pub mod party;
pub mod service_request;

pub use party::{entity as party_entity, entity_builder as party_entity_builder};
pub use service_request::{
    entity as service_request_entity, entity_builder as service_request_entity_builder,
};

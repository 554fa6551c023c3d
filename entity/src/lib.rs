//! SeaORM entity models for the service desk database.
//!
//! One module per table. Import `prelude` for the entity types.

pub mod prelude;

pub mod comment;
pub mod jurisdiction;
pub mod party;
pub mod permission;
pub mod priority;
pub mod role;
pub mod role_permission;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;

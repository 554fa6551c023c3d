//! Server-side domain models and parameter types.
//!
//! Repositories build these from SeaORM entity models and controllers turn them into
//! DTOs. The `Create*Param`/`Update*Param` types carry validated input downwards;
//! `summary` and `report` hold the dashboard aggregates and the report filter.

pub mod comment;
pub mod jurisdiction;
pub mod page;
pub mod party;
pub mod permission;
pub mod priority;
pub mod report;
pub mod role;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;
pub mod summary;

//! HTTP handlers.
//!
//! Each handler checks access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts the DTO into a server param, calls the matching service and publishes a
//! change event after a successful mutation.

pub mod auth;
pub mod comment;
pub mod event;
pub mod jurisdiction;
pub mod param;
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

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Uniqueness (409), referenced records (400) and required fields
//! - **Defaults**: Filling in what a new service request leaves out
//! - **Orchestration**: Coordinating several repositories for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Lookups of a single record return `Option` and deletes return `bool`, leaving the
//! controller to answer 404.

pub mod auth;
pub mod check;
pub mod comment;
pub mod jurisdiction;
pub mod party;
pub mod permission;
pub mod priority;
pub mod report;
pub mod role;
pub mod seed;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;

#[cfg(test)]
mod test;

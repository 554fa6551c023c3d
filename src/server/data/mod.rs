//! Database repository layer for all domain entities.
//!
//! One repository per table, plus `reference` which batch-loads the names and colors a
//! page of service requests points at. Repositories return `DbErr`, apart from
//! `service_request` whose row conversion can fail. Uniqueness and reference rules
//! are left to the service layer.

pub mod comment;
pub mod jurisdiction;
pub mod party;
pub mod permission;
pub mod priority;
pub mod reference;
pub mod role;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;

#[cfg(test)]
mod test;

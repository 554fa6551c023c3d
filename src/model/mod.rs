//! Wire types shared by every API endpoint.

pub mod api;
pub mod auth;
pub mod comment;
pub mod event;
pub mod jurisdiction;
pub mod party;
pub mod permission;
pub mod priority;
pub mod report;
pub mod resource;
pub mod role;
pub mod service;
pub mod service_group;
pub mod service_request;
pub mod setting;
pub mod status;

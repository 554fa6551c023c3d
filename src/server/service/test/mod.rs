mod auth;
mod comment;
mod jurisdiction;
mod party;
mod priority;
mod report;
mod seed;
mod service;
mod service_group;
mod service_request;
mod status;

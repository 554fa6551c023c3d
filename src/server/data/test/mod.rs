mod comment;
mod jurisdiction;
mod party;
mod permission;
mod priority;
mod role;
mod service;
mod service_request;
mod setting;
mod status;

use super::*;

mod require_permission;
mod require_token;

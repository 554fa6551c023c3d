//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{event::EventBus, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing secret behind an `Arc`
/// - `EventBus` wraps a broadcast sender
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Broadcasts change notifications to connected clients.
    pub events: EventBus,

    /// Failed signins allowed before an account locks.
    pub max_failed_attempts: i32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token service
    /// - `events` - Change notification bus
    /// - `max_failed_attempts` - Lockout threshold for signin
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        events: EventBus,
        max_failed_attempts: i32,
    ) -> Self {
        Self {
            db,
            tokens,
            events,
            max_failed_attempts,
        }
    }
}

//! Party fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::party;

pub const DEFAULT_NAME: &str = "Test Operator";

pub const DEFAULT_EMAIL: &str = "operator@example.org";

/// Creates a confirmed, unlocked party entity model with default values.
///
/// The password hash is a placeholder and does not verify against any password.
pub fn entity() -> party::Model {
    entity_builder().build()
}

pub fn entity_builder() -> PartyEntityBuilder {
    PartyEntityBuilder {
        entity: party::Model {
            id: 1,
            role_id: None,
            jurisdiction_id: None,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: None,
            password_hash: "$2b$04$placeholder".to_string(),
            failed_attempts: 0,
            locked_at: None,
            unlock_token: None,
            confirmation_token: None,
            confirmed_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            recovery_token: None,
            recovery_sent_at: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        },
    }
}

pub struct PartyEntityBuilder {
    entity: party::Model,
}

impl PartyEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn role_id(mut self, role_id: i32) -> Self {
        self.entity.role_id = Some(role_id);
        self
    }

    pub fn unconfirmed(mut self) -> Self {
        self.entity.confirmed_at = None;
        self
    }

    pub fn locked(mut self) -> Self {
        self.entity.locked_at = Some(self.entity.created_at);
        self
    }

    pub fn build(self) -> party::Model {
        self.entity
    }
}

//! Party factory for creating test accounts.
//!
//! Passwords are hashed with the minimum bcrypt cost to keep tests fast.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to every factory-created party unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct-horse";

/// Factory for creating test parties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let operator = PartyFactory::new(&db)
///     .email("operator@example.org")
///     .role_id(role.id)
///     .build()
///     .await?;
/// ```
pub struct PartyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    role_id: Option<i32>,
    confirmed: bool,
    locked: bool,
    confirmation_token: Option<String>,
    recovery_token: Option<String>,
    unlock_token: Option<String>,
}

impl<'a> PartyFactory<'a> {
    /// Creates a new PartyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Party {id}"`
    /// - email: `"party{id}@example.org"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - confirmed: `true`, locked: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Party {}", id),
            email: format!("party{}@example.org", id),
            password: DEFAULT_PASSWORD.to_string(),
            role_id: None,
            confirmed: true,
            locked: false,
            confirmation_token: None,
            recovery_token: None,
            unlock_token: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    pub fn confirmation_token(mut self, token: impl Into<String>) -> Self {
        self.confirmation_token = Some(token.into());
        self
    }

    pub fn recovery_token(mut self, token: impl Into<String>) -> Self {
        self.recovery_token = Some(token.into());
        self
    }

    /// Locks the account with the given unlock token.
    pub fn locked(mut self, unlock_token: impl Into<String>) -> Self {
        self.locked = true;
        self.unlock_token = Some(unlock_token.into());
        self
    }

    pub async fn build(self) -> Result<entity::party::Model, DbErr> {
        let now = Utc::now();
        let password_hash = bcrypt::hash(&self.password, 4)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?;

        entity::party::ActiveModel {
            role_id: ActiveValue::Set(self.role_id),
            jurisdiction_id: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(password_hash),
            failed_attempts: ActiveValue::Set(0),
            locked_at: ActiveValue::Set(self.locked.then_some(now)),
            unlock_token: ActiveValue::Set(self.unlock_token),
            confirmation_token: ActiveValue::Set(self.confirmation_token),
            confirmed_at: ActiveValue::Set(self.confirmed.then_some(now)),
            recovery_token: ActiveValue::Set(self.recovery_token),
            recovery_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed party without a role.
pub async fn create_party(db: &DatabaseConnection) -> Result<entity::party::Model, DbErr> {
    PartyFactory::new(db).build().await
}

//! Service factory for creating test service entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    jurisdiction_id: Option<i32>,
    group_id: i32,
    priority_id: Option<i32>,
    code: String,
    name: String,
}

impl<'a> ServiceFactory<'a> {
    /// Defaults: code `"S{id}"`, name `"Service {id}"`, no priority.
    ///
    /// # Arguments
    /// - `group_id` - Existing service group the service belongs to
    pub fn new(db: &'a DatabaseConnection, group_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            jurisdiction_id: None,
            group_id,
            priority_id: None,
            code: format!("S{}", id),
            name: format!("Service {}", id),
        }
    }

    pub fn jurisdiction_id(mut self, jurisdiction_id: i32) -> Self {
        self.jurisdiction_id = Some(jurisdiction_id);
        self
    }

    pub fn priority_id(mut self, priority_id: i32) -> Self {
        self.priority_id = Some(priority_id);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            jurisdiction_id: ActiveValue::Set(self.jurisdiction_id),
            group_id: ActiveValue::Set(self.group_id),
            priority_id: ActiveValue::Set(self.priority_id),
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            color: ActiveValue::Set("#0099CC".to_string()),
            is_external: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_service(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, group_id).build().await
}

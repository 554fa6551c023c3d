//! Service group factory for creating test service group entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ServiceGroupFactory<'a> {
    db: &'a DatabaseConnection,
    jurisdiction_id: Option<i32>,
    code: String,
    name: String,
}

impl<'a> ServiceGroupFactory<'a> {
    /// Defaults: code `"G{id}"`, name `"Group {id}"`, no jurisdiction.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            jurisdiction_id: None,
            code: format!("G{}", id),
            name: format!("Group {}", id),
        }
    }

    pub fn jurisdiction_id(mut self, jurisdiction_id: i32) -> Self {
        self.jurisdiction_id = Some(jurisdiction_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::service_group::Model, DbErr> {
        let now = Utc::now();
        entity::service_group::ActiveModel {
            jurisdiction_id: ActiveValue::Set(self.jurisdiction_id),
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            color: ActiveValue::Set("#669933".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_service_group(
    db: &DatabaseConnection,
) -> Result<entity::service_group::Model, DbErr> {
    ServiceGroupFactory::new(db).build().await
}

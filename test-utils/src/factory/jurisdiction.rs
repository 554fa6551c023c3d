//! Jurisdiction factory for creating test jurisdiction entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct JurisdictionFactory<'a> {
    db: &'a DatabaseConnection,
    parent_id: Option<i32>,
    code: String,
    name: String,
    color: String,
}

impl<'a> JurisdictionFactory<'a> {
    /// Creates a new JurisdictionFactory with default values.
    ///
    /// Defaults:
    /// - code: `"J{id}"`
    /// - name: `"Jurisdiction {id}"`
    /// - color: `"#336699"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            parent_id: None,
            code: format!("J{}", id),
            name: format!("Jurisdiction {}", id),
            color: "#336699".to_string(),
        }
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub async fn build(self) -> Result<entity::jurisdiction::Model, DbErr> {
        let now = Utc::now();
        entity::jurisdiction::ActiveModel {
            parent_id: ActiveValue::Set(self.parent_id),
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            about: ActiveValue::Set(None),
            color: ActiveValue::Set(self.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a jurisdiction with default values.
pub async fn create_jurisdiction(
    db: &DatabaseConnection,
) -> Result<entity::jurisdiction::Model, DbErr> {
    JurisdictionFactory::new(db).build().await
}

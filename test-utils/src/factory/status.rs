//! Status factory for creating test status entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test status rows.
///
/// # Example
///
/// ```rust,ignore
/// let low = StatusFactory::new(&db).name("Low").weight(10).build().await?;
/// ```
pub struct StatusFactory<'a> {
    db: &'a DatabaseConnection,
    jurisdiction_id: Option<i32>,
    name: String,
    weight: i32,
    color: String,
}

impl<'a> StatusFactory<'a> {
    /// Defaults: name `"Status {id}"`, weight `0`, color `"#AA0000"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            jurisdiction_id: None,
            name: format!("Status {}", id),
            weight: 0,
            color: "#AA0000".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub async fn build(self) -> Result<entity::status::Model, DbErr> {
        let now = Utc::now();
        entity::status::ActiveModel {
            jurisdiction_id: ActiveValue::Set(self.jurisdiction_id),
            name: ActiveValue::Set(self.name),
            weight: ActiveValue::Set(self.weight),
            color: ActiveValue::Set(self.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a status with default values.
pub async fn create_status(db: &DatabaseConnection) -> Result<entity::status::Model, DbErr> {
    StatusFactory::new(db).build().await
}

//! Priority factory for creating test priority entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test priority rows.
///
/// # Example
///
/// ```rust,ignore
/// let low = PriorityFactory::new(&db).name("Low").weight(10).build().await?;
/// ```
pub struct PriorityFactory<'a> {
    db: &'a DatabaseConnection,
    jurisdiction_id: Option<i32>,
    name: String,
    weight: i32,
    color: String,
}

impl<'a> PriorityFactory<'a> {
    /// Defaults: name `"Priority {id}"`, weight `0`, color `"#AA0000"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            jurisdiction_id: None,
            name: format!("Priority {}", id),
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

    pub async fn build(self) -> Result<entity::priority::Model, DbErr> {
        let now = Utc::now();
        entity::priority::ActiveModel {
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

/// Creates a priority with default values.
pub async fn create_priority(db: &DatabaseConnection) -> Result<entity::priority::Model, DbErr> {
    PriorityFactory::new(db).build().await
}

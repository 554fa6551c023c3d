//! Setting factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::setting::Model, DbErr> {
    let now = Utc::now();
    entity::setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        name: ActiveValue::Set(key.replace('_', " ")),
        value: ActiveValue::Set(value.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

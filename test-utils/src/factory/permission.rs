//! Permission factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the `resource:action` permission.
pub async fn create_permission(
    db: &DatabaseConnection,
    resource: &str,
    action: &str,
) -> Result<entity::permission::Model, DbErr> {
    entity::permission::ActiveModel {
        resource: ActiveValue::Set(resource.to_string()),
        action: ActiveValue::Set(action.to_string()),
        wildcard: ActiveValue::Set(format!("{}:{}", resource, action)),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

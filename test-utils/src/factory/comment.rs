//! Comment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on an existing service request.
pub async fn create_comment(
    db: &DatabaseConnection,
    service_request_id: i32,
    commentator_id: Option<i32>,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        service_request_id: ActiveValue::Set(service_request_id),
        commentator_id: ActiveValue::Set(commentator_id),
        content: ActiveValue::Set("Technician dispatched".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

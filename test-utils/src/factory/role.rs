//! Role factory for creating test roles and their permission grants.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    permission_ids: Vec<i32>,
}

impl<'a> RoleFactory<'a> {
    /// Defaults: name `"Role {id}"`, no permissions.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Role {}", next_id()),
            permission_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Grants the given permissions to the role.
    pub fn permissions(mut self, permission_ids: Vec<i32>) -> Self {
        self.permission_ids = permission_ids;
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        let now = Utc::now();
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for permission_id in self.permission_ids {
            entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role.id),
                permission_id: ActiveValue::Set(permission_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(role)
    }
}

pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::{PageParam, Paginated},
    role::{CreateRoleParam, Role, UpdateRoleParam},
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role and grants it the given permissions
    pub async fn create(&self, params: CreateRoleParam) -> Result<Role, DbErr> {
        let now = Utc::now();
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.grant(role.id, params.permission_ids).await?;

        let permissions = self.permission_wildcards(role.id).await?;

        Ok(Role::from_entity(role, permissions))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let Some(role) = entity::prelude::Role::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let permissions = self.permission_wildcards(role.id).await?;

        Ok(Some(Role::from_entity(role, permissions)))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let Some(role) = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let permissions = self.permission_wildcards(role.id).await?;

        Ok(Some(Role::from_entity(role, permissions)))
    }

    /// Gets paginated roles ordered by name with their permission wildcards
    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Role>, DbErr> {
        let mut query = entity::prelude::Role::find();
        if let Some(q) = &param.q {
            query = query.filter(entity::role::Column::Name.contains(q));
        }

        let paginator = query
            .order_by_asc(entity::role::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let roles = paginator.fetch_page(param.index()).await?;

        let mut wildcards = self
            .wildcards_by_role(roles.iter().map(|r| r.id).collect())
            .await?;

        let roles = roles
            .into_iter()
            .map(|role| {
                let permissions = wildcards.remove(&role.id).unwrap_or_default();
                Role::from_entity(role, permissions)
            })
            .collect();

        Ok(Paginated::new(roles, total, param))
    }

    /// Updates name and description, replacing permission grants when provided
    pub async fn update(&self, params: UpdateRoleParam) -> Result<Role, DbErr> {
        let role = entity::prelude::Role::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::role::ActiveModel = role.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if params.description.is_some() {
            active_model.description = ActiveValue::Set(params.description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let role = active_model.update(self.db).await?;

        if let Some(permission_ids) = params.permission_ids {
            entity::prelude::RolePermission::delete_many()
                .filter(entity::role_permission::Column::RoleId.eq(role.id))
                .exec(self.db)
                .await?;

            self.grant(role.id, permission_ids).await?;
        }

        let permissions = self.permission_wildcards(role.id).await?;

        Ok(Role::from_entity(role, permissions))
    }

    /// Adds permission grants to a role, skipping ones it already holds
    pub async fn grant(&self, role_id: i32, permission_ids: Vec<i32>) -> Result<(), DbErr> {
        let existing: Vec<i32> = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::RoleId.eq(role_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|rp| rp.permission_id)
            .collect();

        let mut permission_ids = permission_ids;
        permission_ids.sort_unstable();
        permission_ids.dedup();

        for permission_id in permission_ids {
            if existing.contains(&permission_id) {
                continue;
            }

            entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                permission_id: ActiveValue::Set(permission_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RolePermission::delete_many()
            .filter(entity::role_permission::Column::RoleId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks whether any party holds the role
    pub async fn is_assigned(&self, id: i32) -> Result<bool, DbErr> {
        let parties = entity::prelude::Party::find()
            .filter(entity::party::Column::RoleId.eq(id))
            .count(self.db)
            .await?;

        Ok(parties > 0)
    }

    /// Gets the sorted wildcards of every permission granted to a role
    pub async fn permission_wildcards(&self, role_id: i32) -> Result<Vec<String>, DbErr> {
        let mut wildcards = self.wildcards_by_role(vec![role_id]).await?;

        Ok(wildcards.remove(&role_id).unwrap_or_default())
    }

    /// Gets the sorted permission wildcards of several roles at once
    pub async fn wildcards_by_role(
        &self,
        role_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if role_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let grants = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::RoleId.is_in(role_ids))
            .find_also_related(entity::prelude::Permission)
            .all(self.db)
            .await?;

        let mut wildcards: HashMap<i32, Vec<String>> = HashMap::new();
        for (grant, permission) in grants {
            if let Some(permission) = permission {
                wildcards
                    .entry(grant.role_id)
                    .or_default()
                    .push(permission.wildcard);
            }
        }

        for list in wildcards.values_mut() {
            list.sort();
        }

        Ok(wildcards)
    }
}

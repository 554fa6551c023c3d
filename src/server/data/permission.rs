use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::{PageParam, Paginated},
    permission::{CreatePermissionParam, Permission},
};

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePermissionParam) -> Result<Permission, DbErr> {
        let wildcard = Permission::wildcard_for(&params.resource, &params.action);
        let entity = entity::permission::ActiveModel {
            resource: ActiveValue::Set(params.resource.trim().to_lowercase()),
            action: ActiveValue::Set(params.action.trim().to_lowercase()),
            wildcard: ActiveValue::Set(wildcard),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Permission::from_entity(entity))
    }

    /// Returns the permission for the wildcard, creating it when missing
    pub async fn ensure(&self, params: CreatePermissionParam) -> Result<Permission, DbErr> {
        let wildcard = Permission::wildcard_for(&params.resource, &params.action);
        if let Some(existing) = self.find_by_wildcard(&wildcard).await? {
            return Ok(existing);
        }

        self.create(params).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Permission>, DbErr> {
        let entity = entity::prelude::Permission::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Permission::from_entity))
    }

    pub async fn find_by_wildcard(&self, wildcard: &str) -> Result<Option<Permission>, DbErr> {
        let entity = entity::prelude::Permission::find()
            .filter(entity::permission::Column::Wildcard.eq(wildcard))
            .one(self.db)
            .await?;

        Ok(entity.map(Permission::from_entity))
    }

    /// Gets paginated permissions ordered by wildcard, searching resource and action
    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Permission>, DbErr> {
        let mut query = entity::prelude::Permission::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::permission::Column::Wildcard.contains(q))
                    .add(entity::permission::Column::Description.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::permission::Column::Wildcard)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let permissions = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(Permission::from_entity)
            .collect();

        Ok(Paginated::new(permissions, total, param))
    }

    /// Gets the ids among `ids` that exist
    pub async fn existing_ids(&self, ids: Vec<i32>) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Permission::find()
            .select_only()
            .column(entity::permission::Column::Id)
            .filter(entity::permission::Column::Id.is_in(ids))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Permission::find()
            .select_only()
            .column(entity::permission::Column::Id)
            .order_by_asc(entity::permission::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn update_description(
        &self,
        id: i32,
        description: Option<String>,
    ) -> Result<Permission, DbErr> {
        let permission = entity::prelude::Permission::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Permission with id {} not found",
                id
            )))?;

        let mut active_model: entity::permission::ActiveModel = permission.into();
        active_model.description = ActiveValue::Set(description);

        let entity = active_model.update(self.db).await?;

        Ok(Permission::from_entity(entity))
    }

    /// Deletes a permission along with every role grant of it
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RolePermission::delete_many()
            .filter(entity::role_permission::Column::PermissionId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Permission::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

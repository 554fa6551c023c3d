use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{
        reference::{unique_ids, ReferenceRepository},
        role::RoleRepository,
    },
    model::{
        page::{PageParam, Paginated},
        party::{CreatePartyParam, Party, UpdatePartyParam},
    },
};

pub struct PartyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePartyParam) -> Result<Party, DbErr> {
        let now = Utc::now();
        let entity = entity::party::ActiveModel {
            role_id: ActiveValue::Set(params.role_id),
            jurisdiction_id: ActiveValue::Set(params.jurisdiction_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            failed_attempts: ActiveValue::Set(0),
            locked_at: ActiveValue::Set(None),
            unlock_token: ActiveValue::Set(None),
            confirmation_token: ActiveValue::Set(params.confirmation_token),
            confirmed_at: ActiveValue::Set(params.confirmed_at),
            recovery_token: ActiveValue::Set(None),
            recovery_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.load_one(entity).await
    }

    /// Gets a party with its role and permission wildcards
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Party>, DbErr> {
        match entity::prelude::Party::find_by_id(id).one(self.db).await? {
            Some(entity) => Ok(Some(self.load_one(entity).await?)),
            None => Ok(None),
        }
    }

    /// Gets the raw row, including credentials, for authentication
    pub async fn find_entity_by_id(&self, id: i32) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find_by_id(id).one(self.db).await
    }

    pub async fn find_entity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_confirmation_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::ConfirmationToken.eq(token))
            .one(self.db)
            .await
    }

    pub async fn find_by_unlock_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::UnlockToken.eq(token))
            .one(self.db)
            .await
    }

    pub async fn find_by_recovery_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::RecoveryToken.eq(token))
            .one(self.db)
            .await
    }

    /// Gets paginated parties ordered by name, searching name, email and phone
    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Party>, DbErr> {
        let mut query = entity::prelude::Party::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::party::Column::Name.contains(q))
                    .add(entity::party::Column::Email.contains(q))
                    .add(entity::party::Column::Phone.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::party::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.index()).await?;
        let parties = self.load(entities).await?;

        Ok(Paginated::new(parties, total, param))
    }

    pub async fn update(&self, params: UpdatePartyParam) -> Result<Party, DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(params.id).await?.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if params.phone.is_some() {
            active_model.phone = ActiveValue::Set(params.phone);
        }
        if let Some(role_id) = params.role_id {
            active_model.role_id = ActiveValue::Set(Some(role_id));
        }
        if let Some(jurisdiction_id) = params.jurisdiction_id {
            active_model.jurisdiction_id = ActiveValue::Set(Some(jurisdiction_id));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        self.load_one(entity).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Party::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Counts a failed signin, locking the account once `max_attempts` is reached
    ///
    /// Returns the updated row; `locked_at` is set when this attempt locked it.
    pub async fn record_failed_signin(
        &self,
        id: i32,
        max_attempts: i32,
        unlock_token: String,
    ) -> Result<entity::party::Model, DbErr> {
        let party = self.find_model(id).await?;
        let failed_attempts = party.failed_attempts + 1;
        let lock = failed_attempts >= max_attempts && party.locked_at.is_none();

        let mut active_model: entity::party::ActiveModel = party.into();
        active_model.failed_attempts = ActiveValue::Set(failed_attempts);
        if lock {
            active_model.locked_at = ActiveValue::Set(Some(Utc::now()));
            active_model.unlock_token = ActiveValue::Set(Some(unlock_token));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn reset_failed_attempts(&self, id: i32) -> Result<(), DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(id).await?.into();
        active_model.failed_attempts = ActiveValue::Set(0);
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn confirm(&self, id: i32) -> Result<(), DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(id).await?.into();
        active_model.confirmed_at = ActiveValue::Set(Some(Utc::now()));
        active_model.confirmation_token = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Clears the lock and failed attempt counter
    pub async fn unlock(&self, id: i32) -> Result<(), DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(id).await?.into();
        active_model.locked_at = ActiveValue::Set(None);
        active_model.unlock_token = ActiveValue::Set(None);
        active_model.failed_attempts = ActiveValue::Set(0);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn set_recovery_token(&self, id: i32, token: String) -> Result<(), DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(id).await?.into();
        active_model.recovery_token = ActiveValue::Set(Some(token));
        active_model.recovery_sent_at = ActiveValue::Set(Some(Utc::now()));
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Replaces the password hash and drops any pending recovery token
    pub async fn set_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let mut active_model: entity::party::ActiveModel = self.find_model(id).await?.into();
        active_model.password_hash = ActiveValue::Set(password_hash);
        active_model.recovery_token = ActiveValue::Set(None);
        active_model.recovery_sent_at = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn count_with_role(&self, role_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::RoleId.eq(role_id))
            .count(self.db)
            .await
    }

    async fn find_model(&self, id: i32) -> Result<entity::party::Model, DbErr> {
        entity::prelude::Party::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Party with id {} not found",
                id
            )))
    }

    async fn load_one(&self, entity: entity::party::Model) -> Result<Party, DbErr> {
        let id = entity.id;
        self.load(vec![entity])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Party with id {} not found after write",
                id
            )))
    }

    /// Attaches role references and permission wildcards to party rows
    async fn load(&self, entities: Vec<entity::party::Model>) -> Result<Vec<Party>, DbErr> {
        let role_ids = unique_ids(entities.iter().map(|p| p.role_id));
        let roles = ReferenceRepository::new(self.db)
            .roles(role_ids.clone())
            .await?;
        let wildcards = RoleRepository::new(self.db)
            .wildcards_by_role(role_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let role = entity.role_id.and_then(|id| roles.get(&id).cloned());
                let permissions = entity
                    .role_id
                    .and_then(|id| wildcards.get(&id).cloned())
                    .unwrap_or_default();
                Party::from_entity(entity, role, permissions)
            })
            .collect())
    }
}

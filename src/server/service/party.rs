use sea_orm::DatabaseConnection;

use crate::{
    model::party::CreatePartyDto,
    server::{
        data::{party::PartyRepository, role::RoleRepository},
        error::AppError,
        model::{
            page::{PageParam, Paginated},
            party::{normalize_email, CreatePartyParam, Party, UpdatePartyParam},
        },
        service::{
            auth::{hash_password, validate_password},
            check::{ensure_jurisdiction, require_text, require_text_if_present},
        },
        util::random::generate_token,
    },
};

pub struct PartyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unconfirmed account with a hashed password
    ///
    /// The confirmation token is logged for the operator to pass on.
    pub async fn create(&self, dto: CreatePartyDto) -> Result<Party, AppError> {
        require_text("Name", &dto.name)?;
        validate_password(&dto.password)?;
        self.ensure_email_free(None, &normalize_email(&dto.email))
            .await?;
        if let Some(role_id) = dto.role_id {
            self.ensure_role(role_id).await?;
        }
        ensure_jurisdiction(self.db, dto.jurisdiction_id).await?;

        let password_hash = hash_password(&dto.password)?;
        let token = generate_token();
        let params = CreatePartyParam::from_dto(dto, password_hash, token.clone());

        let party = PartyRepository::new(self.db).create(params).await?;

        tracing::info!("Confirmation token for party {}: {}", party.id, token);

        Ok(party)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Party>, AppError> {
        Ok(PartyRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Party>, AppError> {
        Ok(PartyRepository::new(self.db).get_paginated(param).await?)
    }

    /// Returns None if the party doesn't exist
    pub async fn update(&self, params: UpdatePartyParam) -> Result<Option<Party>, AppError> {
        let repo = PartyRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        if let Some(email) = &params.email {
            self.ensure_email_free(Some(params.id), email).await?;
        }
        if let Some(role_id) = params.role_id {
            self.ensure_role(role_id).await?;
        }
        require_text_if_present("Name", params.name.as_deref())?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        Ok(Some(repo.update(params).await?))
    }

    /// Deletes another party's account
    /// Returns false if not found, BadRequest when `current_party_id` targets itself
    pub async fn delete(&self, id: i32, current_party_id: i32) -> Result<bool, AppError> {
        let repo = PartyRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if id == current_party_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_email_free(&self, id: Option<i32>, email: &str) -> Result<(), AppError> {
        let existing = PartyRepository::new(self.db)
            .find_entity_by_email(email)
            .await?;

        match existing {
            Some(other) if Some(other.id) != id => Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                email
            ))),
            _ => Ok(()),
        }
    }

    async fn ensure_role(&self, role_id: i32) -> Result<(), AppError> {
        match RoleRepository::new(self.db).find_by_id(role_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!("Role {} not found", role_id))),
        }
    }
}

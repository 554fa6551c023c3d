use chrono::{DateTime, Utc};

use crate::{
    model::party::{CreatePartyDto, PaginatedPartiesDto, PartyDto, UpdatePartyDto},
    server::model::{page::Paginated, service_request::Reference},
};

/// Staff account or other actor of the system.
///
/// Carries the wildcards of its role's permissions so authorization checks need
/// no further lookups. The password hash never leaves this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Party {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<Reference>,
    pub jurisdiction_id: Option<i32>,
    pub permissions: Vec<String>,
    pub failed_attempts: i32,
    pub locked_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Party {
    pub fn from_entity(
        entity: entity::party::Model,
        role: Option<Reference>,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            role,
            jurisdiction_id: entity.jurisdiction_id,
            permissions,
            failed_attempts: entity.failed_attempts,
            locked_at: entity.locked_at,
            confirmed_at: entity.confirmed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked_at.is_some()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }

    /// Whether the party's role grants `wildcard`.
    pub fn has_permission(&self, wildcard: &str) -> bool {
        self.permissions.iter().any(|p| p == wildcard)
    }

    pub fn into_dto(self) -> PartyDto {
        let confirmed = self.is_confirmed();
        let locked = self.is_locked();

        PartyDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role.map(Reference::into_dto),
            jurisdiction_id: self.jurisdiction_id,
            permissions: self.permissions,
            confirmed,
            locked,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Paginated<Party> {
    pub fn into_dto(self) -> PaginatedPartiesDto {
        let pages = self.pages();
        PaginatedPartiesDto {
            parties: self.items.into_iter().map(Party::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePartyParam {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
    /// Set for accounts that skip the confirmation step.
    pub confirmed_at: Option<DateTime<Utc>>,
    pub confirmation_token: Option<String>,
}

impl CreatePartyParam {
    /// Builds the param from a request body once the password has been hashed.
    pub fn from_dto(dto: CreatePartyDto, password_hash: String, confirmation_token: String) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: dto.phone,
            password_hash,
            role_id: dto.role_id,
            jurisdiction_id: dto.jurisdiction_id,
            confirmed_at: None,
            confirmation_token: Some(confirmation_token),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePartyParam {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
}

impl UpdatePartyParam {
    pub fn from_dto(id: i32, dto: UpdatePartyDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            email: dto.email.as_deref().map(normalize_email),
            phone: dto.phone,
            role_id: dto.role_id,
            jurisdiction_id: dto.jurisdiction_id,
        }
    }
}

/// Emails are matched case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

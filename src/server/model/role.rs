use chrono::{DateTime, Utc};

use crate::{
    model::role::{CreateRoleDto, PaginatedRolesDto, RoleDto, UpdateRoleDto},
    server::model::page::Paginated,
};

/// Role with the wildcards of every permission it grants.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            permissions: self.permissions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::role::Model, permissions: Vec<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            permissions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Paginated<Role> {
    pub fn into_dto(self) -> PaginatedRolesDto {
        let pages = self.pages();
        PaginatedRolesDto {
            roles: self.items.into_iter().map(Role::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParam {
    pub name: String,
    pub description: Option<String>,
    pub permission_ids: Vec<i32>,
}

impl CreateRoleParam {
    pub fn from_dto(dto: CreateRoleDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            permission_ids: dto.permissions,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParam {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Replaces the granted set when `Some`.
    pub permission_ids: Option<Vec<i32>>,
}

impl UpdateRoleParam {
    pub fn from_dto(id: i32, dto: UpdateRoleDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            permission_ids: dto.permissions,
        }
    }
}

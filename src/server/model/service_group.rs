use chrono::{DateTime, Utc};

use crate::{
    model::service_group::{
        CreateServiceGroupDto, PaginatedServiceGroupsDto, ServiceGroupDto, UpdateServiceGroupDto,
    },
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceGroup {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceGroup {
    pub fn into_dto(self) -> ServiceGroupDto {
        ServiceGroupDto {
            id: self.id,
            jurisdiction_id: self.jurisdiction_id,
            code: self.code,
            name: self.name,
            description: self.description,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::service_group::Model) -> Self {
        Self {
            id: entity.id,
            jurisdiction_id: entity.jurisdiction_id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            color: entity.color,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Paginated<ServiceGroup> {
    pub fn into_dto(self) -> PaginatedServiceGroupsDto {
        let pages = self.pages();
        PaginatedServiceGroupsDto {
            servicegroups: self.items.into_iter().map(ServiceGroup::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceGroupParam {
    pub jurisdiction_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl CreateServiceGroupParam {
    pub fn from_dto(dto: CreateServiceGroupDto) -> Self {
        Self {
            jurisdiction_id: dto.jurisdiction_id,
            code: dto.code.trim().to_string(),
            name: dto.name.trim().to_string(),
            description: dto.description,
            color: dto.color,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceGroupParam {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl UpdateServiceGroupParam {
    pub fn from_dto(id: i32, dto: UpdateServiceGroupDto) -> Self {
        Self {
            id,
            jurisdiction_id: dto.jurisdiction_id,
            code: dto.code.map(|c| c.trim().to_string()),
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            color: dto.color,
        }
    }
}

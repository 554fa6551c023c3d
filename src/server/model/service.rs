//! Service domain model.
//!
//! A service is the kind of issue a citizen reports (water leakage, billing, ...).
//! Each belongs to a service group and may carry the priority that new requests
//! for it start with.

use chrono::{DateTime, Utc};

use crate::{
    model::service::{CreateServiceDto, PaginatedServicesDto, ServiceDto, UpdateServiceDto},
    server::model::{page::Paginated, service_request::Reference},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub group_id: i32,
    pub priority_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub is_external: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            jurisdiction_id: entity.jurisdiction_id,
            group_id: entity.group_id,
            priority_id: entity.priority_id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            color: entity.color,
            is_external: entity.is_external,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Service together with its resolved group and default priority.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceWithRelations {
    pub service: Service,
    pub group: Option<Reference>,
    pub priority: Option<Reference>,
}

impl ServiceWithRelations {
    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.service.id,
            jurisdiction_id: self.service.jurisdiction_id,
            group: self.group.map(Reference::into_dto),
            priority: self.priority.map(Reference::into_dto),
            code: self.service.code,
            name: self.service.name,
            description: self.service.description,
            color: self.service.color,
            is_external: self.service.is_external,
            created_at: self.service.created_at,
            updated_at: self.service.updated_at,
        }
    }
}

impl Paginated<ServiceWithRelations> {
    pub fn into_dto(self) -> PaginatedServicesDto {
        let pages = self.pages();
        PaginatedServicesDto {
            services: self
                .items
                .into_iter()
                .map(ServiceWithRelations::into_dto)
                .collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParam {
    pub jurisdiction_id: Option<i32>,
    pub group_id: i32,
    pub priority_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_external: bool,
}

impl CreateServiceParam {
    pub fn from_dto(dto: CreateServiceDto) -> Self {
        Self {
            jurisdiction_id: dto.jurisdiction_id,
            group_id: dto.group_id,
            priority_id: dto.priority_id,
            code: dto.code.trim().to_uppercase(),
            name: dto.name.trim().to_string(),
            description: dto.description,
            color: dto.color,
            is_external: dto.is_external,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParam {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub group_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_external: Option<bool>,
}

impl UpdateServiceParam {
    pub fn from_dto(id: i32, dto: UpdateServiceDto) -> Self {
        Self {
            id,
            jurisdiction_id: dto.jurisdiction_id,
            group_id: dto.group_id,
            priority_id: dto.priority_id,
            code: dto.code.map(|c| c.trim().to_uppercase()),
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            color: dto.color,
            is_external: dto.is_external,
        }
    }
}

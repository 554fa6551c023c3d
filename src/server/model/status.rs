use chrono::{DateTime, Utc};

use crate::{
    model::status::{CreateStatusDto, PaginatedStatusesDto, StatusDto, UpdateStatusDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    pub weight: i32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    pub fn into_dto(self) -> StatusDto {
        StatusDto {
            id: self.id,
            jurisdiction_id: self.jurisdiction_id,
            name: self.name,
            weight: self.weight,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::status::Model) -> Self {
        Self {
            id: entity.id,
            jurisdiction_id: entity.jurisdiction_id,
            name: entity.name,
            weight: entity.weight,
            color: entity.color,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Paginated<Status> {
    pub fn into_dto(self) -> PaginatedStatusesDto {
        let pages = self.pages();
        PaginatedStatusesDto {
            statuses: self.items.into_iter().map(Status::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStatusParam {
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    pub weight: i32,
    /// Random color is assigned when absent.
    pub color: Option<String>,
}

impl CreateStatusParam {
    pub fn from_dto(dto: CreateStatusDto) -> Self {
        Self {
            jurisdiction_id: dto.jurisdiction_id,
            name: dto.name.trim().to_string(),
            weight: dto.weight,
            color: dto.color,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStatusParam {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub name: Option<String>,
    pub weight: Option<i32>,
    pub color: Option<String>,
}

impl UpdateStatusParam {
    pub fn from_dto(id: i32, dto: UpdateStatusDto) -> Self {
        Self {
            id,
            jurisdiction_id: dto.jurisdiction_id,
            name: dto.name.map(|n| n.trim().to_string()),
            weight: dto.weight,
            color: dto.color,
        }
    }
}

use chrono::{DateTime, Utc};

use crate::{
    model::priority::{CreatePriorityDto, PaginatedPrioritiesDto, PriorityDto, UpdatePriorityDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Priority {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    pub weight: i32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Priority {
    pub fn into_dto(self) -> PriorityDto {
        PriorityDto {
            id: self.id,
            jurisdiction_id: self.jurisdiction_id,
            name: self.name,
            weight: self.weight,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::priority::Model) -> Self {
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

impl Paginated<Priority> {
    pub fn into_dto(self) -> PaginatedPrioritiesDto {
        let pages = self.pages();
        PaginatedPrioritiesDto {
            priorities: self.items.into_iter().map(Priority::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePriorityParam {
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    pub weight: i32,
    /// Random color is assigned when absent.
    pub color: Option<String>,
}

impl CreatePriorityParam {
    pub fn from_dto(dto: CreatePriorityDto) -> Self {
        Self {
            jurisdiction_id: dto.jurisdiction_id,
            name: dto.name.trim().to_string(),
            weight: dto.weight,
            color: dto.color,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePriorityParam {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub name: Option<String>,
    pub weight: Option<i32>,
    pub color: Option<String>,
}

impl UpdatePriorityParam {
    pub fn from_dto(id: i32, dto: UpdatePriorityDto) -> Self {
        Self {
            id,
            jurisdiction_id: dto.jurisdiction_id,
            name: dto.name.map(|n| n.trim().to_string()),
            weight: dto.weight,
            color: dto.color,
        }
    }
}

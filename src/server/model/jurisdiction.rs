use chrono::{DateTime, Utc};

use crate::{
    model::jurisdiction::{
        CreateJurisdictionDto, JurisdictionDto, PaginatedJurisdictionsDto, UpdateJurisdictionDto,
    },
    server::model::page::Paginated,
};

/// Geographic or administrative area that scopes service requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Jurisdiction {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Jurisdiction {
    pub fn into_dto(self) -> JurisdictionDto {
        JurisdictionDto {
            id: self.id,
            parent_id: self.parent_id,
            code: self.code,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            about: self.about,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::jurisdiction::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            code: entity.code,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            about: entity.about,
            color: entity.color,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Paginated<Jurisdiction> {
    pub fn into_dto(self) -> PaginatedJurisdictionsDto {
        let pages = self.pages();
        PaginatedJurisdictionsDto {
            jurisdictions: self.items.into_iter().map(Jurisdiction::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJurisdictionParam {
    pub parent_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub color: Option<String>,
}

impl CreateJurisdictionParam {
    pub fn from_dto(dto: CreateJurisdictionDto) -> Self {
        Self {
            parent_id: dto.parent_id,
            code: dto.code.trim().to_string(),
            name: dto.name.trim().to_string(),
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            about: dto.about,
            color: dto.color,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJurisdictionParam {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub color: Option<String>,
}

impl UpdateJurisdictionParam {
    pub fn from_dto(id: i32, dto: UpdateJurisdictionDto) -> Self {
        Self {
            id,
            parent_id: dto.parent_id,
            code: dto.code.map(|c| c.trim().to_string()),
            name: dto.name.map(|n| n.trim().to_string()),
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            about: dto.about,
            color: dto.color,
        }
    }
}

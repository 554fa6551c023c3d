use chrono::{DateTime, Utc};

use crate::{
    model::setting::{CreateSettingDto, PaginatedSettingsDto, SettingDto, UpdateSettingDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub id: i32,
    pub key: String,
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            id: self.id,
            key: self.key,
            name: self.name,
            value: self.value,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            name: entity.name,
            value: entity.value,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Paginated<Setting> {
    pub fn into_dto(self) -> PaginatedSettingsDto {
        let pages = self.pages();
        PaginatedSettingsDto {
            settings: self.items.into_iter().map(Setting::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSettingParam {
    pub key: String,
    pub name: String,
    pub value: String,
    pub description: Option<String>,
}

impl CreateSettingParam {
    pub fn from_dto(dto: CreateSettingDto) -> Self {
        Self {
            key: dto.key.trim().to_lowercase(),
            name: dto.name.trim().to_string(),
            value: dto.value,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingParam {
    pub id: i32,
    pub name: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

impl UpdateSettingParam {
    pub fn from_dto(id: i32, dto: UpdateSettingDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            value: dto.value,
            description: dto.description,
        }
    }
}

use crate::{
    model::permission::{CreatePermissionDto, PaginatedPermissionsDto, PermissionDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub id: i32,
    pub resource: String,
    pub action: String,
    pub wildcard: String,
    pub description: Option<String>,
}

impl Permission {
    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            id: self.id,
            resource: self.resource,
            action: self.action,
            wildcard: self.wildcard,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::permission::Model) -> Self {
        Self {
            id: entity.id,
            resource: entity.resource,
            action: entity.action,
            wildcard: entity.wildcard,
            description: entity.description,
        }
    }

    /// Builds the `resource:action` wildcard.
    pub fn wildcard_for(resource: &str, action: &str) -> String {
        format!("{}:{}", resource.trim().to_lowercase(), action.trim().to_lowercase())
    }
}

impl Paginated<Permission> {
    pub fn into_dto(self) -> PaginatedPermissionsDto {
        let pages = self.pages();
        PaginatedPermissionsDto {
            permissions: self.items.into_iter().map(Permission::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePermissionParam {
    pub resource: String,
    pub action: String,
    pub description: Option<String>,
}

impl CreatePermissionParam {
    pub fn from_dto(dto: CreatePermissionDto) -> Self {
        Self {
            resource: dto.resource.trim().to_lowercase(),
            action: dto.action.trim().to_lowercase(),
            description: dto.description,
        }
    }
}

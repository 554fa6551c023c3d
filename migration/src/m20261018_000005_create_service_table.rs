use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_jurisdiction_table::Jurisdiction,
    m20261018_000002_create_service_group_table::ServiceGroup,
    m20261018_000003_create_priority_table::Priority,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(integer_null(Service::JurisdictionId))
                    .col(integer(Service::GroupId))
                    .col(integer_null(Service::PriorityId))
                    .col(string_uniq(Service::Code))
                    .col(string_uniq(Service::Name))
                    .col(text_null(Service::Description))
                    .col(string(Service::Color))
                    .col(boolean(Service::IsExternal).default(false))
                    .col(timestamp_with_time_zone(Service::CreatedAt))
                    .col(timestamp_with_time_zone(Service::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_jurisdiction_id")
                            .from(Service::Table, Service::JurisdictionId)
                            .to(Jurisdiction::Table, Jurisdiction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_group_id")
                            .from(Service::Table, Service::GroupId)
                            .to(ServiceGroup::Table, ServiceGroup::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_priority_id")
                            .from(Service::Table, Service::PriorityId)
                            .to(Priority::Table, Priority::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    JurisdictionId,
    GroupId,
    PriorityId,
    Code,
    Name,
    Description,
    Color,
    IsExternal,
    CreatedAt,
    UpdatedAt,
}

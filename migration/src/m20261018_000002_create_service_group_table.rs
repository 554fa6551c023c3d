use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000001_create_jurisdiction_table::Jurisdiction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceGroup::Id))
                    .col(integer_null(ServiceGroup::JurisdictionId))
                    .col(string_uniq(ServiceGroup::Code))
                    .col(string_uniq(ServiceGroup::Name))
                    .col(text_null(ServiceGroup::Description))
                    .col(string(ServiceGroup::Color))
                    .col(timestamp_with_time_zone(ServiceGroup::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceGroup::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_group_jurisdiction_id")
                            .from(ServiceGroup::Table, ServiceGroup::JurisdictionId)
                            .to(Jurisdiction::Table, Jurisdiction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceGroup {
    Table,
    Id,
    JurisdictionId,
    Code,
    Name,
    Description,
    Color,
    CreatedAt,
    UpdatedAt,
}

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
                    .table(Status::Table)
                    .if_not_exists()
                    .col(pk_auto(Status::Id))
                    .col(integer_null(Status::JurisdictionId))
                    .col(string_uniq(Status::Name))
                    .col(integer(Status::Weight).default(0))
                    .col(string(Status::Color))
                    .col(timestamp_with_time_zone(Status::CreatedAt))
                    .col(timestamp_with_time_zone(Status::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_status_jurisdiction_id")
                            .from(Status::Table, Status::JurisdictionId)
                            .to(Jurisdiction::Table, Jurisdiction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_status_weight")
                    .table(Status::Table)
                    .col(Status::Weight)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Status {
    Table,
    Id,
    JurisdictionId,
    Name,
    Weight,
    Color,
    CreatedAt,
    UpdatedAt,
}

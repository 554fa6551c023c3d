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
                    .table(Priority::Table)
                    .if_not_exists()
                    .col(pk_auto(Priority::Id))
                    .col(integer_null(Priority::JurisdictionId))
                    .col(string_uniq(Priority::Name))
                    .col(integer(Priority::Weight).default(0))
                    .col(string(Priority::Color))
                    .col(timestamp_with_time_zone(Priority::CreatedAt))
                    .col(timestamp_with_time_zone(Priority::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_priority_jurisdiction_id")
                            .from(Priority::Table, Priority::JurisdictionId)
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
                    .name("idx_priority_weight")
                    .table(Priority::Table)
                    .col(Priority::Weight)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Priority::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Priority {
    Table,
    Id,
    JurisdictionId,
    Name,
    Weight,
    Color,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jurisdiction::Table)
                    .if_not_exists()
                    .col(pk_auto(Jurisdiction::Id))
                    .col(integer_null(Jurisdiction::ParentId))
                    .col(string_uniq(Jurisdiction::Code))
                    .col(string_uniq(Jurisdiction::Name))
                    .col(string_null(Jurisdiction::Phone))
                    .col(string_null(Jurisdiction::Email))
                    .col(string_null(Jurisdiction::Address))
                    .col(text_null(Jurisdiction::About))
                    .col(string(Jurisdiction::Color))
                    .col(timestamp_with_time_zone(Jurisdiction::CreatedAt))
                    .col(timestamp_with_time_zone(Jurisdiction::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jurisdiction_parent_id")
                            .from(Jurisdiction::Table, Jurisdiction::ParentId)
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
            .drop_table(Table::drop().table(Jurisdiction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Jurisdiction {
    Table,
    Id,
    ParentId,
    Code,
    Name,
    Phone,
    Email,
    Address,
    About,
    Color,
    CreatedAt,
    UpdatedAt,
}

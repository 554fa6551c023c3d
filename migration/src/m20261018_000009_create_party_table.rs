use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_jurisdiction_table::Jurisdiction,
    m20261018_000007_create_role_table::Role,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Party::Table)
                    .if_not_exists()
                    .col(pk_auto(Party::Id))
                    .col(integer_null(Party::RoleId))
                    .col(integer_null(Party::JurisdictionId))
                    .col(string(Party::Name))
                    .col(string_uniq(Party::Email))
                    .col(string_null(Party::Phone))
                    .col(string(Party::PasswordHash))
                    .col(integer(Party::FailedAttempts).default(0))
                    .col(timestamp_with_time_zone_null(Party::LockedAt))
                    .col(string_null(Party::UnlockToken))
                    .col(string_null(Party::ConfirmationToken))
                    .col(timestamp_with_time_zone_null(Party::ConfirmedAt))
                    .col(string_null(Party::RecoveryToken))
                    .col(timestamp_with_time_zone_null(Party::RecoverySentAt))
                    .col(timestamp_with_time_zone(Party::CreatedAt))
                    .col(timestamp_with_time_zone(Party::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_role_id")
                            .from(Party::Table, Party::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_jurisdiction_id")
                            .from(Party::Table, Party::JurisdictionId)
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
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Party {
    Table,
    Id,
    RoleId,
    JurisdictionId,
    Name,
    Email,
    Phone,
    PasswordHash,
    FailedAttempts,
    LockedAt,
    UnlockToken,
    ConfirmationToken,
    ConfirmedAt,
    RecoveryToken,
    RecoverySentAt,
    CreatedAt,
    UpdatedAt,
}

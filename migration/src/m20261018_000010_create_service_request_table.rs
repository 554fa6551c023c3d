use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_jurisdiction_table::Jurisdiction,
    m20261018_000002_create_service_group_table::ServiceGroup,
    m20261018_000003_create_priority_table::Priority,
    m20261018_000004_create_status_table::Status,
    m20261018_000005_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRequest::Id))
                    .col(string_uniq(ServiceRequest::Code))
                    .col(integer_null(ServiceRequest::JurisdictionId))
                    .col(integer_null(ServiceRequest::GroupId))
                    .col(integer(ServiceRequest::ServiceId))
                    .col(integer(ServiceRequest::PriorityId))
                    .col(integer(ServiceRequest::StatusId))
                    .col(string(ServiceRequest::ReporterName))
                    .col(string(ServiceRequest::ReporterPhone))
                    .col(string_null(ServiceRequest::ReporterEmail))
                    .col(string_null(ServiceRequest::ReporterAccount))
                    .col(text(ServiceRequest::Description))
                    .col(string_null(ServiceRequest::Address))
                    .col(string(ServiceRequest::Method))
                    .col(string_null(ServiceRequest::Workspace))
                    .col(integer_null(ServiceRequest::OperatorId))
                    .col(integer_null(ServiceRequest::AssigneeId))
                    .col(timestamp_with_time_zone_null(ServiceRequest::CallStartedAt))
                    .col(timestamp_with_time_zone_null(ServiceRequest::CallEndedAt))
                    .col(timestamp_with_time_zone_null(ServiceRequest::ResolvedAt))
                    .col(timestamp_with_time_zone(ServiceRequest::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_jurisdiction_id")
                            .from(ServiceRequest::Table, ServiceRequest::JurisdictionId)
                            .to(Jurisdiction::Table, Jurisdiction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_group_id")
                            .from(ServiceRequest::Table, ServiceRequest::GroupId)
                            .to(ServiceGroup::Table, ServiceGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_service_id")
                            .from(ServiceRequest::Table, ServiceRequest::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_priority_id")
                            .from(ServiceRequest::Table, ServiceRequest::PriorityId)
                            .to(Priority::Table, Priority::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_status_id")
                            .from(ServiceRequest::Table, ServiceRequest::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_request_created_at")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceRequest {
    Table,
    Id,
    Code,
    JurisdictionId,
    GroupId,
    ServiceId,
    PriorityId,
    StatusId,
    ReporterName,
    ReporterPhone,
    ReporterEmail,
    ReporterAccount,
    Description,
    Address,
    Method,
    Workspace,
    OperatorId,
    AssigneeId,
    CallStartedAt,
    CallEndedAt,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}

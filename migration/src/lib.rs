pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_jurisdiction_table;
mod m20261018_000002_create_service_group_table;
mod m20261018_000003_create_priority_table;
mod m20261018_000004_create_status_table;
mod m20261018_000005_create_service_table;
mod m20261018_000006_create_permission_table;
mod m20261018_000007_create_role_table;
mod m20261018_000008_create_role_permission_table;
mod m20261018_000009_create_party_table;
mod m20261018_000010_create_service_request_table;
mod m20261018_000011_create_comment_table;
mod m20261018_000012_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_jurisdiction_table::Migration),
            Box::new(m20261018_000002_create_service_group_table::Migration),
            Box::new(m20261018_000003_create_priority_table::Migration),
            Box::new(m20261018_000004_create_status_table::Migration),
            Box::new(m20261018_000005_create_service_table::Migration),
            Box::new(m20261018_000006_create_permission_table::Migration),
            Box::new(m20261018_000007_create_role_table::Migration),
            Box::new(m20261018_000008_create_role_permission_table::Migration),
            Box::new(m20261018_000009_create_party_table::Migration),
            Box::new(m20261018_000010_create_service_request_table::Migration),
            Box::new(m20261018_000011_create_comment_table::Migration),
            Box::new(m20261018_000012_create_setting_table::Migration),
        ]
    }
}

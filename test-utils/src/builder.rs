use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Priority, Status};
///
/// let test = TestBuilder::new()
///     .with_table(Priority)
///     .with_table(Status)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the lookup tables services are configured from.
    ///
    /// Adds in dependency order:
    /// - Jurisdiction
    /// - ServiceGroup
    /// - Priority
    /// - Status
    /// - Service
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Jurisdiction)
            .with_table(ServiceGroup)
            .with_table(Priority)
            .with_table(Status)
            .with_table(Service)
    }

    /// Adds the tables backing accounts and authorization.
    ///
    /// Adds in dependency order:
    /// - Jurisdiction
    /// - Permission
    /// - Role
    /// - RolePermission
    /// - Party
    pub fn with_auth_tables(self) -> Self {
        self.with_table(Jurisdiction)
            .with_table(Permission)
            .with_table(Role)
            .with_table(RolePermission)
            .with_table(Party)
    }

    /// Adds every table needed to record service requests and their comments.
    ///
    /// Equivalent to `with_catalog_tables()` plus accounts, ServiceRequest and Comment.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_service_request_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_service_request_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Permission)
            .with_table(Role)
            .with_table(RolePermission)
            .with_table(Party)
            .with_table(ServiceRequest)
            .with_table(Comment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

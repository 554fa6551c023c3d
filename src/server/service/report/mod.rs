//! Dashboard aggregates and exports.
//!
//! Every report loads the requests matching a [`ReportFilter`] and aggregates them in
//! memory; see [`aggregate`] for the grouping rules and [`export`] for the CSV layout.

pub mod aggregate;
pub mod export;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reference::ReferenceRepository, service_request::ServiceRequestRepository},
    error::AppError,
    model::{
        report::{prepare_query, ReportFilter},
        service_request::{References, ServiceRequest},
        summary::{Overview, Standing, Summary},
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(&self, filter: ReportFilter) -> Result<Summary, AppError> {
        let requests = self.requests(filter).await?;

        Ok(Summary::from_requests(&requests))
    }

    pub async fn overview(&self, filter: ReportFilter) -> Result<Overview, AppError> {
        let (requests, refs) = self.requests_with_references(filter).await?;

        Ok(aggregate::overview(&requests, &refs))
    }

    pub async fn standings(&self, filter: ReportFilter) -> Result<Vec<Standing>, AppError> {
        let (requests, refs) = self.requests_with_references(filter).await?;

        Ok(aggregate::standings(&requests, &refs))
    }

    /// CSV bytes of the matching requests, oldest first
    pub async fn export(&self, filter: ReportFilter) -> Result<Vec<u8>, AppError> {
        let (requests, refs) = self.requests_with_references(filter).await?;

        tracing::debug!("Exporting {} service requests", requests.len());

        export::write_csv(&requests, &refs)
    }

    async fn requests(&self, filter: ReportFilter) -> Result<Vec<ServiceRequest>, AppError> {
        let condition = prepare_query(filter, Utc::now()).into_condition();

        ServiceRequestRepository::new(self.db)
            .find_all(condition)
            .await
    }

    async fn requests_with_references(
        &self,
        filter: ReportFilter,
    ) -> Result<(Vec<ServiceRequest>, References), AppError> {
        let requests = self.requests(filter).await?;
        let refs = ReferenceRepository::new(self.db)
            .for_requests(&requests)
            .await?;

        Ok((requests, refs))
    }
}

//! Batch loading of related records shown by name next to service requests,
//! services, parties and comments.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::service_request::{Reference, References, ServiceRequest};

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn jurisdictions(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Jurisdiction::find()
            .filter(entity::jurisdiction::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, Some(r.color))))
            .collect())
    }

    pub async fn groups(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ServiceGroup::find()
            .filter(entity::service_group::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, Some(r.color))))
            .collect())
    }

    pub async fn services(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, Some(r.color))))
            .collect())
    }

    pub async fn priorities(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Priority::find()
            .filter(entity::priority::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, Some(r.color))))
            .collect())
    }

    pub async fn statuses(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Status::find()
            .filter(entity::status::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, Some(r.color))))
            .collect())
    }

    pub async fn parties(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Party::find()
            .filter(entity::party::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, None)))
            .collect())
    }

    pub async fn roles(&self, ids: Vec<i32>) -> Result<HashMap<i32, Reference>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.id, Reference::new(r.id, r.name, None)))
            .collect())
    }

    /// Loads everything a batch of service requests refers to, one query per table
    pub async fn for_requests(&self, requests: &[ServiceRequest]) -> Result<References, DbErr> {
        Ok(References {
            jurisdictions: self
                .jurisdictions(unique_ids(requests.iter().map(|r| r.jurisdiction_id)))
                .await?,
            groups: self
                .groups(unique_ids(requests.iter().map(|r| r.group_id)))
                .await?,
            services: self
                .services(unique_ids(requests.iter().map(|r| Some(r.service_id))))
                .await?,
            priorities: self
                .priorities(unique_ids(requests.iter().map(|r| Some(r.priority_id))))
                .await?,
            statuses: self
                .statuses(unique_ids(requests.iter().map(|r| Some(r.status_id))))
                .await?,
            parties: self
                .parties(unique_ids(
                    requests
                        .iter()
                        .flat_map(|r| [r.operator_id, r.assignee_id]),
                ))
                .await?,
        })
    }
}

/// Collects the distinct ids present.
pub fn unique_ids(ids: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.flatten().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::resource::Resource;

/// Application-wide notification pushed to connected clients.
///
/// Clients listen for these to refresh list and dashboard views after a
/// mutation made elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum AppEvent {
    Created { resource: Resource, id: i32 },
    Updated { resource: Resource, id: i32 },
    Deleted { resource: Resource, id: i32 },
    Reload { resources: Vec<Resource> },
}

impl AppEvent {
    /// SSE event name.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::Created { .. } => "created",
            AppEvent::Updated { .. } => "updated",
            AppEvent::Deleted { .. } => "deleted",
            AppEvent::Reload { .. } => "reload",
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// REST resources exposed by the API.
///
/// The serialized name doubles as the URL segment and as the resource half of a
/// permission wildcard (`priorities:create`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Jurisdictions,
    ServiceGroups,
    Services,
    Priorities,
    Statuses,
    Parties,
    Roles,
    Permissions,
    ServiceRequests,
    Comments,
    Settings,
    Summaries,
    Reports,
}

impl Resource {
    pub const ALL: [Resource; 13] = [
        Resource::Jurisdictions,
        Resource::ServiceGroups,
        Resource::Services,
        Resource::Priorities,
        Resource::Statuses,
        Resource::Parties,
        Resource::Roles,
        Resource::Permissions,
        Resource::ServiceRequests,
        Resource::Comments,
        Resource::Settings,
        Resource::Summaries,
        Resource::Reports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Jurisdictions => "jurisdictions",
            Resource::ServiceGroups => "servicegroups",
            Resource::Services => "services",
            Resource::Priorities => "priorities",
            Resource::Statuses => "statuses",
            Resource::Parties => "parties",
            Resource::Roles => "roles",
            Resource::Permissions => "permissions",
            Resource::ServiceRequests => "servicerequests",
            Resource::Comments => "comments",
            Resource::Settings => "settings",
            Resource::Summaries => "summaries",
            Resource::Reports => "reports",
        }
    }
}

/// Operations a role may be granted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

use axum::{routing::patch, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        comment::{self, COMMENT_TAG},
        event::{self, EVENT_TAG},
        jurisdiction::{self, JURISDICTION_TAG},
        party::{self, PARTY_TAG},
        permission::{self, PERMISSION_TAG},
        priority::{self, PRIORITY_TAG},
        report::{self, REPORT_TAG},
        role::{self, ROLE_TAG},
        service::{self, SERVICE_TAG},
        service_group::{self, SERVICE_GROUP_TAG},
        service_request::{self, SERVICE_REQUEST_TAG},
        setting::{self, SETTING_TAG},
        status::{self, STATUS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Service Desk API",
        description = "Citizen service request intake, tracking and reporting"
    ),
    tags(
        (name = AUTH_TAG, description = "Signin and account recovery"),
        (name = JURISDICTION_TAG, description = "Jurisdictions"),
        (name = SERVICE_GROUP_TAG, description = "Service groups"),
        (name = SERVICE_TAG, description = "Services requests are logged against"),
        (name = PRIORITY_TAG, description = "Request priorities"),
        (name = STATUS_TAG, description = "Request statuses"),
        (name = ROLE_TAG, description = "Roles"),
        (name = PERMISSION_TAG, description = "Permissions granted through roles"),
        (name = PARTY_TAG, description = "Staff accounts"),
        (name = SERVICE_REQUEST_TAG, description = "Service requests"),
        (name = COMMENT_TAG, description = "Comments on service requests"),
        (name = SETTING_TAG, description = "Key value settings"),
        (name = REPORT_TAG, description = "Dashboard aggregates and exports"),
        (name = EVENT_TAG, description = "Change notifications")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
///
/// Updates are documented as PUT and also answer PATCH with the same partial semantics.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::signin))
        .routes(routes!(auth::forgot))
        .routes(routes!(auth::recover))
        .routes(routes!(auth::confirm))
        .routes(routes!(auth::unlock))
        .routes(routes!(auth::change))
        .routes(routes!(
            jurisdiction::get_jurisdictions,
            jurisdiction::create_jurisdiction
        ))
        .routes(routes!(
            jurisdiction::get_jurisdiction_by_id,
            jurisdiction::update_jurisdiction,
            jurisdiction::delete_jurisdiction
        ))
        .route(
            "/jurisdictions/{id}",
            patch(jurisdiction::update_jurisdiction),
        )
        .routes(routes!(
            service_group::get_service_groups,
            service_group::create_service_group
        ))
        .routes(routes!(
            service_group::get_service_group_by_id,
            service_group::update_service_group,
            service_group::delete_service_group
        ))
        .route(
            "/servicegroups/{id}",
            patch(service_group::update_service_group),
        )
        .routes(routes!(service::get_services, service::create_service))
        .routes(routes!(
            service::get_service_by_id,
            service::update_service,
            service::delete_service
        ))
        .route("/services/{id}", patch(service::update_service))
        .routes(routes!(priority::get_priorities, priority::create_priority))
        .routes(routes!(priority::get_default_priority))
        .routes(routes!(
            priority::get_priority_by_id,
            priority::update_priority,
            priority::delete_priority
        ))
        .route("/priorities/{id}", patch(priority::update_priority))
        .routes(routes!(status::get_statuses, status::create_status))
        .routes(routes!(status::get_default_status))
        .routes(routes!(
            status::get_status_by_id,
            status::update_status,
            status::delete_status
        ))
        .route("/statuses/{id}", patch(status::update_status))
        .routes(routes!(role::get_roles, role::create_role))
        .routes(routes!(
            role::get_role_by_id,
            role::update_role,
            role::delete_role
        ))
        .route("/roles/{id}", patch(role::update_role))
        .routes(routes!(
            permission::get_permissions,
            permission::create_permission
        ))
        .routes(routes!(
            permission::get_permission_by_id,
            permission::update_permission,
            permission::delete_permission
        ))
        .route("/permissions/{id}", patch(permission::update_permission))
        .routes(routes!(party::get_parties, party::create_party))
        .routes(routes!(
            party::get_party_by_id,
            party::update_party,
            party::delete_party
        ))
        .route("/parties/{id}", patch(party::update_party))
        .routes(routes!(
            service_request::get_service_requests,
            service_request::create_service_request
        ))
        .routes(routes!(
            service_request::get_service_request_by_id,
            service_request::update_service_request,
            service_request::delete_service_request
        ))
        .route(
            "/servicerequests/{id}",
            patch(service_request::update_service_request),
        )
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(
            comment::get_comment_by_id,
            comment::delete_comment
        ))
        .routes(routes!(setting::get_settings, setting::create_setting))
        .routes(routes!(setting::get_setting_by_key))
        .routes(routes!(
            setting::get_setting_by_id,
            setting::update_setting,
            setting::delete_setting
        ))
        .route("/settings/{id}", patch(setting::update_setting))
        .routes(routes!(report::get_summary))
        .routes(routes!(report::get_overview))
        .routes(routes!(report::get_standings))
        .routes(routes!(report::get_export))
        .routes(routes!(event::stream_events))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

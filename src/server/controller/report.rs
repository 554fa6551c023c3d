use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{OverviewDto, StandingDto, SummaryDto},
        resource::{Action, Resource},
    },
    server::{
        controller::param::ReportFilterParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::summary::Standing,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping dashboard and report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Dashboard totals over the filtered requests.
///
/// # Access Control
/// - Any authenticated party
///
/// # Returns
/// - `200 OK` - Counts of total, pending, resolved and unattended requests plus averages
/// - `400 Bad Request` - Malformed filter
#[utoipa::path(
    get,
    path = "/summaries",
    tag = REPORT_TAG,
    params(ReportFilterParam),
    responses(
        (status = 200, description = "Successfully computed summary", body = SummaryDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ReportFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let summary = ReportService::new(&state.db)
        .summary(filter.into_filter()?)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Breakdowns of the filtered requests per jurisdiction, group, service, status,
/// priority, contact method and workspace, each with a chart series.
///
/// # Access Control
/// - `reports:view`
#[utoipa::path(
    get,
    path = "/reports/overviews",
    tag = REPORT_TAG,
    params(ReportFilterParam),
    responses(
        (status = 200, description = "Successfully computed overview", body = OverviewDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ReportFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Reports, Action::View)])
        .await?;

    let overview = ReportService::new(&state.db)
        .overview(filter.into_filter()?)
        .await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Request counts per jurisdiction, group, service, status and priority combination.
///
/// # Access Control
/// - `reports:view`
#[utoipa::path(
    get,
    path = "/reports/standings",
    tag = REPORT_TAG,
    params(ReportFilterParam),
    responses(
        (status = 200, description = "Successfully computed standings", body = Vec<StandingDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_standings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ReportFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Reports, Action::View)])
        .await?;

    let standings: Vec<StandingDto> = ReportService::new(&state.db)
        .standings(filter.into_filter()?)
        .await?
        .into_iter()
        .map(Standing::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(standings)))
}

/// Download the filtered requests as CSV.
///
/// # Access Control
/// - `reports:view`
#[utoipa::path(
    get,
    path = "/reports/exports",
    tag = REPORT_TAG,
    params(ReportFilterParam),
    responses(
        (status = 200, description = "CSV of the filtered service requests", content_type = "text/csv", body = String),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_export(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ReportFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Reports, Action::View)])
        .await?;

    let csv = ReportService::new(&state.db)
        .export(filter.into_filter()?)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"servicerequests.csv\"",
            ),
        ],
        csv,
    ))
}

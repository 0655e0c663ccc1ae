use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use jobhub_core::source::source_catalogue;
use jobhub_core::{SearchQuery, SourceFilter};

use crate::auth::{CallerId, require_user};
use crate::dto::{
    HealthResponse, RecommendationsResponse, SearchParams, SearchResponse,
    SkillSuggestionsResponse, SourceResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let profile = Router::new()
        .route("/profile/recommendations", get(recommendations))
        .route("/profile/skill-suggestions", get(skill_suggestions))
        .layer(middleware::from_fn(require_user));

    let public = Router::new()
        .route("/external-jobs/search", get(search_external_jobs))
        .route("/external-jobs/sources", get(list_sources))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(profile).with_state(state)
}

// ---------------------------------------------------------------------------
// External jobs
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/external-jobs/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Merged listings from the selected providers", body = SearchResponse),
    ),
    tag = "external-jobs"
)]
pub async fn search_external_jobs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> axum::Json<SearchResponse> {
    let query = SearchQuery::new(params.keyword.as_deref(), params.location.as_deref());
    let filter = SourceFilter::parse(params.source.as_deref());

    let result = state.aggregator.search(&query, &filter).await;
    axum::Json(result.into())
}

#[utoipa::path(
    get,
    path = "/external-jobs/sources",
    responses(
        (status = 200, description = "Selectable search sources", body = Vec<SourceResponse>),
    ),
    tag = "external-jobs"
)]
pub async fn list_sources() -> axum::Json<Vec<SourceResponse>> {
    axum::Json(source_catalogue().into_iter().map(Into::into).collect())
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/profile/recommendations",
    responses(
        (status = 200, description = "Local postings ranked by skill match", body = RecommendationsResponse),
        (status = 401, description = "Missing or invalid caller id", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store unavailable", body = crate::dto::ErrorResponse),
    ),
    security(("user_id" = [])),
    tag = "profile"
)]
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Extension(CallerId(user_id)): Extension<CallerId>,
) -> Result<axum::Json<RecommendationsResponse>, ApiError> {
    let result = state.advisor()?.recommendations(user_id).await?;
    Ok(axum::Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/profile/skill-suggestions",
    responses(
        (status = 200, description = "In-demand skills missing from the profile", body = SkillSuggestionsResponse),
        (status = 401, description = "Missing or invalid caller id", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store unavailable", body = crate::dto::ErrorResponse),
    ),
    security(("user_id" = [])),
    tag = "profile"
)]
pub async fn skill_suggestions(
    State(state): State<Arc<AppState>>,
    Extension(CallerId(user_id)): Extension<CallerId>,
) -> Result<axum::Json<SkillSuggestionsResponse>, ApiError> {
    let result = state.advisor()?.skill_suggestions(user_id).await?;
    Ok(axum::Json(result.into()))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match &state.db {
        None => "not_configured",
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                "error"
            }
        },
    };

    let (status, label) = if db_status == "error" {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    } else {
        (StatusCode::OK, "healthy")
    };

    (
        status,
        axum::Json(HealthResponse {
            status: label,
            database: db_status,
        }),
    )
}

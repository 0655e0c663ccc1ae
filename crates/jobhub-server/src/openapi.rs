use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobhub API",
        version = "0.1.0",
        description = "External job search aggregation and skill-based recommendations."
    ),
    paths(
        crate::routes::search_external_jobs,
        crate::routes::list_sources,
        crate::routes::recommendations,
        crate::routes::skill_suggestions,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::ExternalJobResponse,
        crate::dto::SearchResponse,
        crate::dto::SourceResponse,
        crate::dto::ScoredJobResponse,
        crate::dto::RecommendationsResponse,
        crate::dto::SkillDemandResponse,
        crate::dto::SkillSuggestionsResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "external-jobs", description = "Search across external job providers"),
        (name = "profile", description = "Recommendations and skill suggestions for the caller"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&CallerIdAddon)
)]
pub struct ApiDoc;

/// Documents the `X-User-Id` header the gateway forwards.
struct CallerIdAddon;

impl utoipa::Modify for CallerIdAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_id",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::with_description(
                            "X-User-Id",
                            "Authenticated user id (UUID), set by the gateway.",
                        ),
                    ),
                ),
            );
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobhub_core::demand::{SkillDemand, SkillSuggestions};
use jobhub_core::relevance::{Recommendations, ScoredJob};
use jobhub_core::{CanonicalJob, SearchResult, SourceDescriptor};

// ---------------------------------------------------------------------------
// External search
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text keyword, e.g. "rust"
    pub keyword: Option<String>,
    /// Location hint, e.g. "Berlin"
    pub location: Option<String>,
    /// Comma-separated provider names, or "all" (default)
    pub source: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalJobResponse {
    /// Provider or publisher name
    pub source: String,
    pub source_logo: Option<String>,
    pub company_logo: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: String,
    pub description: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub apply_url: Option<String>,
}

impl From<CanonicalJob> for ExternalJobResponse {
    fn from(job: CanonicalJob) -> Self {
        Self {
            source: job.source,
            source_logo: job.source_logo,
            company_logo: job.company_logo,
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            job_type: job.job_type,
            salary_range: job.salary_range,
            category: job.category,
            tags: job.tags,
            posted_at: job.posted_at,
            apply_url: job.apply_url,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_count: usize,
    /// Distinct sources present in `jobs`
    pub sources: Vec<String>,
    /// Newest first; undated listings last
    pub jobs: Vec<ExternalJobResponse>,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            total_count: result.total_count,
            sources: result.sources,
            jobs: result.jobs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub is_default: bool,
}

impl From<SourceDescriptor> for SourceResponse {
    fn from(d: SourceDescriptor) -> Self {
        Self {
            name: d.name,
            description: d.description,
            logo: d.logo,
            is_default: d.is_default,
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJobResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub work_location: String,
    pub salary_range: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub employer_id: Uuid,
    /// Number of distinct profile skills found in the posting
    pub match_score: usize,
    pub matched_skills: Vec<String>,
}

impl From<ScoredJob> for ScoredJobResponse {
    fn from(scored: ScoredJob) -> Self {
        let p = scored.posting;
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            requirements: p.requirements,
            work_location: p.work_location,
            salary_range: p.salary_range,
            posted_at: p.posted_at,
            employer_id: p.employer_id,
            match_score: scored.match_score,
            matched_skills: scored.matched_skills,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub message: String,
    pub has_skills: bool,
    pub user_skills: Vec<String>,
    pub recommendations: Vec<ScoredJobResponse>,
}

impl From<Recommendations> for RecommendationsResponse {
    fn from(r: Recommendations) -> Self {
        Self {
            message: r.message,
            has_skills: r.has_skills,
            user_skills: r.user_skills,
            recommendations: r.recommendations.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDemandResponse {
    pub skill: String,
    /// Occurrences across all posting requirements
    pub demand: u32,
    /// "High", "Medium" or "Low"
    pub demand_level: String,
}

impl From<SkillDemand> for SkillDemandResponse {
    fn from(d: SkillDemand) -> Self {
        Self {
            skill: d.skill,
            demand: d.demand,
            demand_level: d.demand_level.to_string(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestionsResponse {
    pub user_skills: Vec<String>,
    pub suggestions: Vec<SkillDemandResponse>,
}

impl From<SkillSuggestions> for SkillSuggestionsResponse {
    fn from(s: SkillSuggestions) -> Self {
        Self {
            user_skills: s.user_skills,
            suggestions: s.suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

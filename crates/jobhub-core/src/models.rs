use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location used when a provider does not say where a job is.
pub const DEFAULT_LOCATION: &str = "Remote";

/// Provider-agnostic job record every adapter normalizes into.
///
/// Missing provider fields stay `None`; adapters never invent values except
/// for `location`, which falls back to [`DEFAULT_LOCATION`]. Once an adapter
/// hands a record over it is never modified, only reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalJob {
    /// Provider or publisher name, used for grouping and display.
    pub source: String,
    pub source_logo: Option<String>,
    pub company_logo: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: String,
    /// Raw provider text. May contain markup.
    pub description: Option<String>,
    pub job_type: Option<String>,
    /// Display string, not structured currency data.
    pub salary_range: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub apply_url: Option<String>,
}

impl CanonicalJob {
    /// Start a record for `source` with every optional field empty.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            source_logo: None,
            company_logo: None,
            title: None,
            company: None,
            location: DEFAULT_LOCATION.to_string(),
            description: None,
            job_type: None,
            salary_range: None,
            category: None,
            tags: Vec::new(),
            posted_at: None,
            apply_url: None,
        }
    }
}

/// Keyword and location hint for an external job search.
///
/// Blank values are normalized to `None` on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    keyword: Option<String>,
    location: Option<String>,
}

impl SearchQuery {
    pub fn new(keyword: Option<&str>, location: Option<&str>) -> Self {
        Self {
            keyword: non_blank(keyword),
            location: non_blank(location),
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Merged outcome of one aggregated search.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub total_count: usize,
    /// Distinct sources actually present in `jobs`, in order of first appearance.
    pub sources: Vec<String>,
    pub jobs: Vec<CanonicalJob>,
}

/// A job posting authored locally. Owned by the job-posting subsystem; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalJobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Free text, skills separated by `,` `;` `/` or `|`.
    pub requirements: String,
    pub work_location: String,
    pub salary_range: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub employer_id: Uuid,
}

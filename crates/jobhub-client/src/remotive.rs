//! Remotive adapter: remote-only listings, keyword search done server-side.

use std::time::Duration;

use async_trait::async_trait;
use jobhub_core::error::AppError;
use jobhub_core::models::{CanonicalJob, DEFAULT_LOCATION, SearchQuery};
use jobhub_core::source::JobSource;
use jobhub_core::text::{LocalFilter, dedupe_tags, humanize, non_empty};
use jobhub_core::traits::JobProvider;
use reqwest::Client;
use serde::Deserialize;

use crate::{http, lenient};
use crate::normalize::parse_timestamp;

pub const MAX_RESULTS: usize = 50;

const FILTER: LocalFilter = LocalFilter {
    keyword: false,
    location: true,
};

#[derive(Clone)]
pub struct RemotiveProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RemotiveProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: base_url.into(),
            timeout,
        })
    }

    async fn try_fetch(&self, query: &SearchQuery) -> Result<Vec<CanonicalJob>, AppError> {
        let mut params = vec![("limit", MAX_RESULTS.to_string())];
        if let Some(keyword) = query.keyword() {
            params.push(("search", keyword.to_string()));
        }
        let url = http::endpoint(&self.base_url, "remote-jobs", &params)?;
        tracing::debug!(%url, "Querying Remotive");

        let body = http::send(self.client.get(url), JobSource::Remotive, self.timeout).await?;
        parse_jobs(&body, query)
    }
}

#[async_trait]
impl JobProvider for RemotiveProvider {
    fn source(&self) -> JobSource {
        JobSource::Remotive
    }

    async fn fetch_jobs(&self, query: &SearchQuery) -> Vec<CanonicalJob> {
        http::settle(JobSource::Remotive, self.try_fetch(query).await)
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    jobs: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RemotiveJob {
    #[serde(default, deserialize_with = "lenient::string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    company_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    publication_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    candidate_required_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    salary: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    description: Option<String>,
}

fn parse_jobs(body: &str, query: &SearchQuery) -> Result<Vec<CanonicalJob>, AppError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let records: Vec<RemotiveJob> = http::decode_records(JobSource::Remotive, envelope.jobs);

    Ok(records
        .into_iter()
        .map(into_canonical)
        .filter(|job| FILTER.accepts(job, query))
        .take(MAX_RESULTS)
        .collect())
}

fn into_canonical(raw: RemotiveJob) -> CanonicalJob {
    let source = JobSource::Remotive;
    CanonicalJob {
        source_logo: Some(source.logo().to_string()),
        company_logo: non_empty(raw.company_logo),
        title: non_empty(raw.title),
        company: non_empty(raw.company_name),
        location: non_empty(raw.candidate_required_location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        description: non_empty(raw.description),
        job_type: non_empty(raw.job_type).map(|t| humanize(&t)),
        salary_range: non_empty(raw.salary),
        category: non_empty(raw.category),
        tags: dedupe_tags(raw.tags.unwrap_or_default(), usize::MAX),
        posted_at: raw.publication_date.as_deref().and_then(parse_timestamp),
        apply_url: non_empty(raw.url),
        ..CanonicalJob::new(source.display_name())
    }
}

//! JSearch (RapidAPI) metasearch adapter.
//!
//! Each listing is attributed to the board it was scraped from, so `source`
//! carries the publisher name rather than "JSearch".

use std::time::Duration;

use async_trait::async_trait;
use jobhub_core::error::AppError;
use jobhub_core::models::{CanonicalJob, DEFAULT_LOCATION, SearchQuery};
use jobhub_core::source::JobSource;
use jobhub_core::text::{dedupe_tags, humanize, non_empty};
use jobhub_core::traits::JobProvider;
use reqwest::Client;
use serde::Deserialize;

use crate::{http, lenient};
use crate::normalize::{format_salary, parse_timestamp};

pub const MAX_RESULTS: usize = 30;
pub const MAX_TAGS: usize = 6;

#[derive(Clone)]
pub struct JSearchProvider {
    client: Client,
    base_url: String,
    host: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl JSearchProvider {
    pub fn new(
        base_url: impl Into<String>,
        host: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: base_url.into(),
            host: host.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout,
        })
    }

    async fn try_fetch(&self, api_key: &str, query: &SearchQuery) -> Result<Vec<CanonicalJob>, AppError> {
        let params = [
            ("query", search_phrase(query)),
            ("page", "1".to_string()),
            ("num_pages", "1".to_string()),
        ];
        let url = http::endpoint(&self.base_url, "search", &params)?;
        let request = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.host);

        let body = http::send(request, JobSource::JSearch, self.timeout).await?;
        parse_jobs(&body)
    }
}

#[async_trait]
impl JobProvider for JSearchProvider {
    fn source(&self) -> JobSource {
        JobSource::JSearch
    }

    async fn fetch_jobs(&self, query: &SearchQuery) -> Vec<CanonicalJob> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("JSEARCH_API_KEY not set; skipping JSearch");
            return Vec::new();
        };
        http::settle(JobSource::JSearch, self.try_fetch(api_key, query).await)
    }
}

/// Free-text query as JSearch expects it: `"<keyword> in <location>"`.
fn search_phrase(query: &SearchQuery) -> String {
    let what = query.keyword().unwrap_or("jobs");
    match query.location() {
        Some(location) => format!("{what} in {location}"),
        None => what.to_string(),
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct JSearchJob {
    #[serde(default, deserialize_with = "lenient::string")]
    job_publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    employer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    employer_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_employment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_apply_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_state: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_posted_at_datetime_utc: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    job_min_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    job_max_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_salary_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    job_salary_period: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    job_required_skills: Option<Vec<String>>,
}

fn parse_jobs(body: &str) -> Result<Vec<CanonicalJob>, AppError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let records: Vec<JSearchJob> = http::decode_records(JobSource::JSearch, envelope.data);

    Ok(records
        .into_iter()
        .take(MAX_RESULTS)
        .map(into_canonical)
        .collect())
}

fn into_canonical(raw: JSearchJob) -> CanonicalJob {
    let publisher = non_empty(raw.job_publisher)
        .unwrap_or_else(|| JobSource::JSearch.display_name().to_string());

    let place: Vec<String> = [raw.job_city, raw.job_state, raw.job_country]
        .into_iter()
        .filter_map(non_empty)
        .collect();
    let location = if place.is_empty() {
        DEFAULT_LOCATION.to_string()
    } else {
        place.join(", ")
    };

    let job_type = non_empty(raw.job_employment_type).map(|t| humanize(&t));
    let tags = dedupe_tags(
        raw.job_required_skills
            .unwrap_or_default()
            .into_iter()
            .chain(job_type.clone()),
        MAX_TAGS,
    );

    CanonicalJob {
        company_logo: non_empty(raw.employer_logo),
        title: non_empty(raw.job_title),
        company: non_empty(raw.employer_name),
        location,
        description: non_empty(raw.job_description),
        job_type,
        salary_range: format_salary(
            raw.job_min_salary,
            raw.job_max_salary,
            raw.job_salary_currency.as_deref(),
            raw.job_salary_period.as_deref(),
        ),
        tags,
        posted_at: raw.job_posted_at_datetime_utc.as_deref().and_then(parse_timestamp),
        apply_url: non_empty(raw.job_apply_link),
        ..CanonicalJob::new(publisher)
    }
}

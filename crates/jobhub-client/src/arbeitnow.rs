//! Arbeitnow adapter. The board API takes no search parameters, so both the
//! keyword and the location are applied to the returned page locally.

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
use crate::normalize::from_unix_seconds;

pub const MAX_RESULTS: usize = 50;

const FILTER: LocalFilter = LocalFilter {
    keyword: true,
    location: true,
};

#[derive(Clone)]
pub struct ArbeitnowProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ArbeitnowProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: base_url.into(),
            timeout,
        })
    }

    async fn try_fetch(&self, query: &SearchQuery) -> Result<Vec<CanonicalJob>, AppError> {
        let url = http::endpoint(&self.base_url, "job-board-api", &[])?;
        let body = http::send(self.client.get(url), JobSource::Arbeitnow, self.timeout).await?;
        parse_jobs(&body, query)
    }
}

#[async_trait]
impl JobProvider for ArbeitnowProvider {
    fn source(&self) -> JobSource {
        JobSource::Arbeitnow
    }

    async fn fetch_jobs(&self, query: &SearchQuery) -> Vec<CanonicalJob> {
        http::settle(JobSource::Arbeitnow, self.try_fetch(query).await)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ArbeitnowJob {
    #[serde(default, deserialize_with = "lenient::string")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::strings")]
    job_types: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    location: Option<String>,
    /// Unix seconds.
    #[serde(default, deserialize_with = "lenient::integer")]
    created_at: Option<i64>,
}

fn parse_jobs(body: &str, query: &SearchQuery) -> Result<Vec<CanonicalJob>, AppError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let records: Vec<ArbeitnowJob> = http::decode_records(JobSource::Arbeitnow, envelope.data);

    Ok(records
        .into_iter()
        .map(into_canonical)
        .filter(|job| FILTER.accepts(job, query))
        .take(MAX_RESULTS)
        .collect())
}

fn into_canonical(raw: ArbeitnowJob) -> CanonicalJob {
    let source = JobSource::Arbeitnow;

    let location = non_empty(raw.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let job_type = raw
        .job_types
        .map(|types| {
            types
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(humanize)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|joined| !joined.is_empty());

    CanonicalJob {
        source_logo: Some(source.logo().to_string()),
        title: non_empty(raw.title),
        company: non_empty(raw.company_name),
        location,
        description: non_empty(raw.description),
        job_type,
        tags: dedupe_tags(raw.tags.unwrap_or_default(), usize::MAX),
        posted_at: raw.created_at.and_then(from_unix_seconds),
        apply_url: non_empty(raw.url),
        ..CanonicalJob::new(source.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testserver;
    use axum::routing::get;
    use axum::{Json, Router};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};

    fn fixture() -> Value {
        json!({
            "data": [
                {
                    "slug": "backend-developer-berlin-123",
                    "company_name": "Kraftwerk GmbH",
                    "title": "Backend Developer",
                    "description": "<p>Go and Postgres</p>",
                    "remote": false,
                    "url": "https://www.arbeitnow.com/jobs/companies/kraftwerk/backend-developer-berlin-123",
                    "tags": ["Software Development", "IT"],
                    "job_types": ["full time", "berufserfahren"],
                    "location": "Berlin",
                    "created_at": 1709287800
                },
                {
                    "slug": "frontend-engineer-remote-456",
                    "company_name": "Pixel AG",
                    "title": "Frontend Engineer",
                    "description": "React and TypeScript",
                    "remote": true,
                    "url": "https://www.arbeitnow.com/jobs/companies/pixel/frontend-engineer-remote-456",
                    "tags": [],
                    "job_types": [],
                    "location": "",
                    "created_at": 1709201400
                },
                {
                    "slug": "broken",
                    "created_at": "yesterday"
                }
            ],
            "links": { "next": "https://www.arbeitnow.com/api/job-board-api?page=2" },
            "meta": { "current_page": 1 }
        })
    }

    #[test]
    fn maps_arbeitnow_fields() {
        let jobs = parse_jobs(&fixture().to_string(), &SearchQuery::default()).unwrap();

        assert_eq!(jobs.len(), 3);
        let job = &jobs[0];
        assert_eq!(job.source, "Arbeitnow");
        assert_eq!(job.company.as_deref(), Some("Kraftwerk GmbH"));
        assert_eq!(job.location, "Berlin");
        assert_eq!(job.job_type.as_deref(), Some("Full Time, Berufserfahren"));
        assert_eq!(job.tags, vec!["Software Development", "IT"]);
        assert_eq!(
            job.posted_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 10, 0).unwrap())
        );
        assert!(job.salary_range.is_none());

        let remote = &jobs[1];
        assert_eq!(remote.location, DEFAULT_LOCATION);
        assert!(remote.job_type.is_none());

        let broken = &jobs[2];
        assert!(broken.title.is_none());
        assert!(broken.posted_at.is_none());
    }

    #[test]
    fn mistyped_fields_are_blanked_not_fatal() {
        let body = json!({ "data": [{
            "title": "Data Engineer",
            "company_name": "Zahl AG",
            "tags": ["Python", null],
            "job_types": "full time",
            "created_at": "1709287800"
        }] });
        let jobs = parse_jobs(&body.to_string(), &SearchQuery::default()).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].tags, vec!["Python"]);
        assert!(jobs[0].job_type.is_none());
        assert_eq!(
            jobs[0].posted_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 10, 0).unwrap())
        );
    }

    #[test]
    fn filters_keyword_and_location_locally() {
        let body = fixture().to_string();

        let by_keyword = parse_jobs(&body, &SearchQuery::new(Some("typescript"), None)).unwrap();
        assert_eq!(by_keyword.len(), 1);
        assert_eq!(by_keyword[0].title.as_deref(), Some("Frontend Engineer"));

        let by_location = parse_jobs(&body, &SearchQuery::new(None, Some("berlin"))).unwrap();
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].company.as_deref(), Some("Kraftwerk GmbH"));

        let both = parse_jobs(&body, &SearchQuery::new(Some("react"), Some("berlin"))).unwrap();
        assert!(both.is_empty());
    }

    #[test]
    fn remote_location_matches_remote_hint() {
        let body = json!({ "data": [
            { "title": "SRE", "location": "Munich" },
            { "title": "SRE", "location": "" }
        ] });
        let jobs = parse_jobs(&body.to_string(), &SearchQuery::new(None, Some("remote"))).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].location, DEFAULT_LOCATION);
    }

    #[test]
    fn missing_data_array_means_no_jobs() {
        let jobs = parse_jobs(r#"{"meta":{}}"#, &SearchQuery::default()).unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn fetches_board_page() {
        let router = Router::new().route("/job-board-api", get(|| async { Json(fixture()) }));
        let base = testserver::spawn(router).await;
        let provider = ArbeitnowProvider::new(base, Duration::from_secs(5)).unwrap();

        let jobs = provider
            .fetch_jobs(&SearchQuery::new(Some("backend"), None))
            .await;

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title.as_deref(), Some("Backend Developer"));
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_empty_list() {
        let router = Router::new().route(
            "/job-board-api",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(fixture())
            }),
        );
        let base = testserver::spawn(router).await;
        let provider = ArbeitnowProvider::new(base, Duration::from_millis(200)).unwrap();

        assert!(provider.fetch_jobs(&SearchQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn non_json_body_yields_empty_list() {
        let router = Router::new().route("/job-board-api", get(|| async { "<html>oops</html>" }));
        let base = testserver::spawn(router).await;
        let provider = ArbeitnowProvider::new(base, Duration::from_secs(5)).unwrap();

        assert!(provider.fetch_jobs(&SearchQuery::default()).await.is_empty());
    }
}

//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit and integration tests.
//! Mocks use `Arc<Mutex<_>>` for interior mutability so tests can assert on
//! recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CanonicalJob, LocalJobPosting, SearchQuery};
use crate::source::JobSource;
use crate::traits::{JobPostingStore, JobProvider, SkillProfileStore};

// ---------------------------------------------------------------------------
// MockProvider
// ---------------------------------------------------------------------------

/// Mock provider that returns a fixed list, optionally after a delay.
#[derive(Clone)]
pub struct MockProvider {
    source: JobSource,
    jobs: Vec<CanonicalJob>,
    delay: Option<Duration>,
    panics: bool,
    /// Every query this provider was called with.
    pub calls: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockProvider {
    pub fn new(source: JobSource, jobs: Vec<CanonicalJob>) -> Self {
        Self {
            source,
            jobs,
            delay: None,
            panics: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose upstream is down. Adapters turn that into an empty list.
    pub fn failing(source: JobSource) -> Self {
        Self::new(source, Vec::new())
    }

    /// A provider that only answers after `delay`.
    pub fn slow(source: JobSource, jobs: Vec<CanonicalJob>, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(source, jobs)
        }
    }

    /// A provider with a bug that panics mid-request.
    pub fn panicking(source: JobSource) -> Self {
        Self {
            panics: true,
            ..Self::new(source, Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JobProvider for MockProvider {
    fn source(&self) -> JobSource {
        self.source
    }

    async fn fetch_jobs(&self, query: &SearchQuery) -> Vec<CanonicalJob> {
        self.calls.lock().unwrap().push(query.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panics {
            panic!("mock provider {} panicked", self.source);
        }
        self.jobs.clone()
    }
}

// ---------------------------------------------------------------------------
// MockPostingStore
// ---------------------------------------------------------------------------

/// In-memory posting store. Returns postings newest first, like the real store.
#[derive(Clone, Default)]
pub struct MockPostingStore {
    postings: Arc<Mutex<Vec<LocalJobPosting>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl MockPostingStore {
    pub fn new(postings: Vec<LocalJobPosting>) -> Self {
        Self {
            postings: Arc::new(Mutex::new(postings)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// A store whose backing database is unreachable.
    pub fn unavailable(message: &str) -> Self {
        Self {
            postings: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(Some(message.to_string()))),
        }
    }
}

#[async_trait]
impl JobPostingStore for MockPostingStore {
    async fn list_postings(&self) -> Result<Vec<LocalJobPosting>, AppError> {
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(AppError::DatabaseError(message));
        }
        let mut postings = self.postings.lock().unwrap().clone();
        postings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Ok(postings)
    }
}

// ---------------------------------------------------------------------------
// MockProfileStore
// ---------------------------------------------------------------------------

/// In-memory skill profile store keyed by user id.
#[derive(Clone, Default)]
pub struct MockProfileStore {
    profiles: Arc<Mutex<HashMap<Uuid, String>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, user_id: Uuid, skills: &str) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id, skills.to_string());
        self
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(Some(message.to_string()))),
        }
    }
}

#[async_trait]
impl SkillProfileStore for MockProfileStore {
    async fn get_skills(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(AppError::DatabaseError(message));
        }
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Midnight UTC on 2024-03-`day`.
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

/// Create a canonical job with a title and optional posting date.
pub fn make_external_job(
    source: &str,
    title: &str,
    posted_at: Option<DateTime<Utc>>,
) -> CanonicalJob {
    let mut job = CanonicalJob::new(source);
    job.title = Some(title.to_string());
    job.company = Some("Acme".to_string());
    job.posted_at = posted_at;
    job.apply_url = Some(format!("https://jobs.example.com/{}", title.replace(' ', "-")));
    job
}

/// Create a local posting with the given text fields.
pub fn make_posting(
    title: &str,
    description: &str,
    requirements: &str,
    posted_at: DateTime<Utc>,
) -> LocalJobPosting {
    LocalJobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        requirements: requirements.to_string(),
        work_location: "Remote".to_string(),
        salary_range: None,
        posted_at,
        employer_id: Uuid::new_v4(),
    }
}

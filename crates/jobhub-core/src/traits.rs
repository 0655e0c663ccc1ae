use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CanonicalJob, LocalJobPosting, SearchQuery};
use crate::skills::SkillSet;
use crate::source::JobSource;

/// Fetches and normalizes job listings from one external provider.
///
/// Implementations absorb every transport, status and decode failure and
/// return an empty list instead, so the aggregator can treat all providers
/// uniformly. Each call issues a fresh request.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn source(&self) -> JobSource;

    async fn fetch_jobs(&self, query: &SearchQuery) -> Vec<CanonicalJob>;
}

/// Read access to locally authored job postings.
#[async_trait]
pub trait JobPostingStore: Send + Sync {
    /// All postings, newest first.
    async fn list_postings(&self) -> Result<Vec<LocalJobPosting>, AppError>;
}

/// Read access to users' skill profiles.
#[async_trait]
pub trait SkillProfileStore: Send + Sync {
    /// Raw comma-separated skills string, or `None` if the user has no profile.
    async fn get_skills(&self, user_id: Uuid) -> Result<Option<String>, AppError>;

    /// The user's skills, normalized.
    async fn skill_set(&self, user_id: Uuid) -> Result<SkillSet, AppError> {
        let raw = self.get_skills(user_id).await?;
        Ok(SkillSet::from_stored(raw.as_deref()))
    }
}

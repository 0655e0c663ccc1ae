use std::sync::Arc;

use uuid::Uuid;

use crate::demand::{SkillSuggestions, suggest_skills};
use crate::error::AppError;
use crate::relevance::{Recommendations, recommend};
use crate::traits::{JobPostingStore, SkillProfileStore};

/// Answers per-user questions over the local job postings.
///
/// Store failures are not best-effort here: they propagate to the caller.
#[derive(Clone)]
pub struct SkillAdvisor {
    postings: Arc<dyn JobPostingStore>,
    profiles: Arc<dyn SkillProfileStore>,
}

impl SkillAdvisor {
    pub fn new(postings: Arc<dyn JobPostingStore>, profiles: Arc<dyn SkillProfileStore>) -> Self {
        Self { postings, profiles }
    }

    /// Local postings ranked against the user's skills.
    pub async fn recommendations(&self, user_id: Uuid) -> Result<Recommendations, AppError> {
        let skills = self.profiles.skill_set(user_id).await?;
        let postings = self.postings.list_postings().await?;
        tracing::debug!(
            %user_id,
            skills = skills.len(),
            postings = postings.len(),
            "Scoring postings"
        );

        let result = recommend(&skills, postings);
        tracing::info!(
            %user_id,
            has_skills = result.has_skills,
            returned = result.recommendations.len(),
            "Recommendations computed"
        );
        Ok(result)
    }

    /// Skills in demand across local postings that the user does not list yet.
    pub async fn skill_suggestions(&self, user_id: Uuid) -> Result<SkillSuggestions, AppError> {
        let skills = self.profiles.skill_set(user_id).await?;
        let postings = self.postings.list_postings().await?;

        let result = suggest_skills(&skills, &postings);
        tracing::info!(
            %user_id,
            suggestions = result.suggestions.len(),
            "Skill suggestions computed"
        );
        Ok(result)
    }
}

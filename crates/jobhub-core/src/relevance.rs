//! Ranks local job postings against a user's skills.
//!
//! A skill matches a posting when it occurs as a plain substring of the
//! lower-cased title, description or requirements. `"sql"` therefore matches
//! `"MySQL"`. The score is the number of distinct matched skills.

use serde::Serialize;

use crate::models::LocalJobPosting;
use crate::skills::SkillSet;

/// Most postings returned when at least one matched.
pub const MAX_RECOMMENDATIONS: usize = 20;
/// Postings returned by the "latest jobs" fallbacks.
pub const FALLBACK_RECENT: usize = 10;

pub const NO_SKILLS_MESSAGE: &str =
    "Add skills to your profile to get personalized recommendations. Showing the latest jobs.";
pub const NO_MATCHES_MESSAGE: &str =
    "No exact matches for your skills yet. Showing the latest jobs instead.";

/// A local posting with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub posting: LocalJobPosting,
    pub match_score: usize,
    /// Matched skills in the user's own order.
    pub matched_skills: Vec<String>,
}

impl ScoredJob {
    fn unscored(posting: LocalJobPosting) -> Self {
        Self {
            posting,
            match_score: 0,
            matched_skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub message: String,
    pub has_skills: bool,
    pub user_skills: Vec<String>,
    pub recommendations: Vec<ScoredJob>,
}

/// Score a single posting.
pub fn score_posting(posting: &LocalJobPosting, skills: &SkillSet) -> ScoredJob {
    let haystacks = [
        posting.requirements.to_lowercase(),
        posting.title.to_lowercase(),
        posting.description.to_lowercase(),
    ];

    let matched_skills: Vec<String> = skills
        .iter()
        .filter(|skill| haystacks.iter().any(|h| h.contains(skill)))
        .map(str::to_string)
        .collect();

    ScoredJob {
        posting: posting.clone(),
        match_score: matched_skills.len(),
        matched_skills,
    }
}

/// Rank `postings` for a user with `skills`.
///
/// - No skills: the 10 newest postings, unscored, `has_skills = false`.
/// - Skills but nothing matched: the 10 newest postings, unscored,
///   `has_skills = true` with a "no exact matches" message.
/// - Otherwise matched postings by score, then newest first, at most 20.
pub fn recommend(skills: &SkillSet, postings: Vec<LocalJobPosting>) -> Recommendations {
    let user_skills = skills.to_vec();

    if skills.is_empty() {
        return Recommendations {
            message: NO_SKILLS_MESSAGE.to_string(),
            has_skills: false,
            user_skills,
            recommendations: latest(postings),
        };
    }

    let mut scored: Vec<ScoredJob> = postings
        .iter()
        .map(|p| score_posting(p, skills))
        .filter(|s| s.match_score > 0)
        .collect();

    if scored.is_empty() {
        return Recommendations {
            message: NO_MATCHES_MESSAGE.to_string(),
            has_skills: true,
            user_skills,
            recommendations: latest(postings),
        };
    }

    scored.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| b.posting.posted_at.cmp(&a.posting.posted_at))
    });
    scored.truncate(MAX_RECOMMENDATIONS);

    Recommendations {
        message: format!("Found {} jobs matching your skills.", scored.len()),
        has_skills: true,
        user_skills,
        recommendations: scored,
    }
}

fn latest(mut postings: Vec<LocalJobPosting>) -> Vec<ScoredJob> {
    postings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    postings
        .into_iter()
        .take(FALLBACK_RECENT)
        .map(ScoredJob::unscored)
        .collect()
}

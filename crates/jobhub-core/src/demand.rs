//! Frequency-ranks skills that appear in posting requirements but are not yet
//! in the user's profile.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::models::LocalJobPosting;
use crate::skills::{SkillSet, normalize_skill};

/// Characters that separate skills inside a requirements string.
pub const REQUIREMENT_DELIMITERS: [char; 4] = [',', ';', '/', '|'];
/// Shortest and longest token, in characters, treated as a skill.
pub const MIN_TOKEN_CHARS: usize = 2;
pub const MAX_TOKEN_CHARS: usize = 29;
pub const MAX_SUGGESTIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    /// More than 5 postings is High, 3 to 5 is Medium, anything less is Low.
    pub fn from_frequency(frequency: u32) -> Self {
        if frequency > 5 {
            DemandLevel::High
        } else if frequency > 2 {
            DemandLevel::Medium
        } else {
            DemandLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDemand {
    /// First-seen spelling of the skill.
    pub skill: String,
    /// Number of occurrences across all requirements.
    pub demand: u32,
    pub demand_level: DemandLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestions {
    pub user_skills: Vec<String>,
    pub suggestions: Vec<SkillDemand>,
}

/// Split a requirements string into candidate skill tokens.
pub fn tokenize_requirements(requirements: &str) -> impl Iterator<Item = &str> {
    requirements
        .split(REQUIREMENT_DELIMITERS)
        .map(str::trim)
        .filter(|token| {
            let len = token.chars().count();
            (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len)
        })
}

struct Tally {
    display: String,
    count: u32,
    first_seen: usize,
}

/// Rank skills in demand across `postings` that the user does not have.
///
/// Counting is case-insensitive; ties keep first-seen order.
pub fn suggest_skills(skills: &SkillSet, postings: &[LocalJobPosting]) -> SkillSuggestions {
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for token in postings
        .iter()
        .flat_map(|p| tokenize_requirements(&p.requirements))
    {
        let key = normalize_skill(token);
        let next_index = tallies.len();
        tallies
            .entry(key)
            .or_insert_with(|| Tally {
                display: token.to_string(),
                count: 0,
                first_seen: next_index,
            })
            .count += 1;
    }

    let mut ranked: Vec<(String, Tally)> = tallies
        .into_iter()
        .filter(|(key, _)| !skills.contains(key))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    let suggestions = ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, tally)| SkillDemand {
            skill: tally.display,
            demand: tally.count,
            demand_level: DemandLevel::from_frequency(tally.count),
        })
        .collect();

    SkillSuggestions {
        user_skills: skills.to_vec(),
        suggestions,
    }
}

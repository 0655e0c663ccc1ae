use serde::Serialize;

/// A user's skills, normalized once when read from the profile store.
///
/// Tokens are lower-cased, trimmed and non-empty. Duplicates are dropped,
/// keeping the user's original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    /// Parse a raw comma-separated skills string.
    pub fn parse(raw: &str) -> Self {
        let mut skills: Vec<String> = Vec::new();
        for token in raw.split(',') {
            let normalized = normalize_skill(token);
            if !normalized.is_empty() && !skills.contains(&normalized) {
                skills.push(normalized);
            }
        }
        Self { skills }
    }

    /// Build from an optional stored value; a missing profile has no skills.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Case-insensitive membership test against the normalized form of `skill`.
    pub fn contains(&self, skill: &str) -> bool {
        let normalized = normalize_skill(skill);
        self.skills.iter().any(|s| *s == normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.skills.clone()
    }
}

/// Normal form used for every skill comparison.
pub fn normalize_skill(token: &str) -> String {
    token.trim().to_lowercase()
}

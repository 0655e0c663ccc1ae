//! Text helpers shared by the provider adapters.

use crate::models::{CanonicalJob, SearchQuery};

/// Case-insensitive substring match of `keyword` across title, company,
/// description and tags.
pub fn matches_keyword(job: &CanonicalJob, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let fields = [&job.title, &job.company, &job.description];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
        || job.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Case-insensitive substring match of `location` against the job location.
pub fn matches_location(job: &CanonicalJob, location: &str) -> bool {
    let needle = location.trim().to_lowercase();
    needle.is_empty() || job.location.to_lowercase().contains(&needle)
}

/// Which parts of a query a provider could not apply server-side.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilter {
    pub keyword: bool,
    pub location: bool,
}

impl LocalFilter {
    pub fn accepts(&self, job: &CanonicalJob, query: &SearchQuery) -> bool {
        let keyword_ok =
            !self.keyword || query.keyword().is_none_or(|k| matches_keyword(job, k));
        let location_ok =
            !self.location || query.location().is_none_or(|l| matches_location(job, l));
        keyword_ok && location_ok
    }
}

/// Trim, drop empties and dedupe case-insensitively, keeping the first
/// spelling and at most `cap` entries.
pub fn dedupe_tags<I, S>(tags: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for tag in tags {
        if out.len() >= cap {
            break;
        }
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        let key = tag.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(tag.to_string());
    }
    out
}

/// Turn provider enum spellings such as `full_time` into `Full Time`.
pub fn humanize(value: &str) -> String {
    value
        .split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Some(trimmed)` unless the value is missing or blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

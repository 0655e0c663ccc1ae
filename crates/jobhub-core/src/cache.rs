//! Short-lived in-memory cache for aggregated searches.
//!
//! Opt-in: the server only builds one when a positive TTL is configured.
//! Nothing is written to disk. The aggregator only stores searches in which
//! every selected provider answered, so a provider outage is not remembered
//! past the request that saw it.

use std::time::Duration;

use moka::future::Cache;

use crate::models::{SearchQuery, SearchResult};
use crate::source::SourceFilter;

const MAX_ENTRIES: u64 = 1_000;

#[derive(Clone)]
pub struct SearchCache {
    entries: Cache<(SearchQuery, SourceFilter), SearchResult>,
}

impl SearchCache {
    pub fn new(ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();
        Self { entries }
    }

    pub async fn get(&self, query: &SearchQuery, filter: &SourceFilter) -> Option<SearchResult> {
        self.entries.get(&(query.clone(), filter.clone())).await
    }

    pub async fn put(&self, query: &SearchQuery, filter: &SourceFilter, result: &SearchResult) {
        if result.jobs.is_empty() {
            return;
        }
        self.entries
            .insert((query.clone(), filter.clone()), result.clone())
            .await;
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;

use crate::cache::SearchCache;
use crate::models::{CanonicalJob, SearchQuery, SearchResult};
use crate::source::SourceFilter;
use crate::traits::JobProvider;

/// Upper bound on how long a single provider may take before it is dropped
/// from the response.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Fans a search out to the selected providers and merges what comes back.
///
/// Each provider runs in its own task under its own timeout. A provider that
/// fails, panics or times out contributes nothing; the others are unaffected.
/// There are no retries.
#[derive(Clone)]
pub struct Aggregator {
    providers: Vec<Arc<dyn JobProvider>>,
    timeout: Duration,
    cache: Option<SearchCache>,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn JobProvider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
            cache: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache(mut self, cache: SearchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run one aggregated search.
    ///
    /// 1. Select providers matching `filter`
    /// 2. Call them concurrently, each bounded by the timeout
    /// 3. Wait for all of them
    /// 4. Merge, sort newest first, collect the sources present
    ///
    /// The result is cached only when every selected provider answered
    /// in time with at least one job.
    pub async fn search(&self, query: &SearchQuery, filter: &SourceFilter) -> SearchResult {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(query, filter).await {
                tracing::debug!(total = hit.total_count, "Search served from cache");
                return hit;
            }
        }

        let selected: Vec<Arc<dyn JobProvider>> = self
            .providers
            .iter()
            .filter(|p| filter.includes(p.source()))
            .cloned()
            .collect();

        tracing::info!(
            keyword = ?query.keyword(),
            location = ?query.location(),
            sources = ?filter.sources(),
            providers = selected.len(),
            "Searching external providers"
        );

        let handles: Vec<_> = selected
            .into_iter()
            .map(|provider| {
                let query = query.clone();
                let timeout = self.timeout;
                let source = provider.source();
                let handle =
                    tokio::spawn(async move { fetch_bounded(provider, &query, timeout).await });
                (source, handle)
            })
            .collect();

        let (sources, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let batches: Vec<Batch> = join_all(handles)
            .await
            .into_iter()
            .zip(sources)
            .map(|(joined, source)| match joined {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::error!(%source, error = %e, "Provider task aborted");
                    Batch::dropped()
                }
            })
            .collect();

        let complete = batches.iter().all(|b| b.complete);
        let result = merge(batches.into_iter().map(|b| b.jobs).collect());
        tracing::info!(
            total = result.total_count,
            sources = ?result.sources,
            complete,
            "Search complete"
        );

        if let Some(cache) = &self.cache {
            if complete {
                cache.put(query, filter, &result).await;
            } else {
                tracing::debug!("Degraded search, not caching");
            }
        }
        result
    }
}

/// What one provider contributed to a search.
struct Batch {
    jobs: Vec<CanonicalJob>,
    /// Answered in time with at least one job. Adapters fold their own
    /// failures into an empty list, so an empty answer counts as degraded.
    complete: bool,
}

impl Batch {
    fn dropped() -> Self {
        Self {
            jobs: Vec::new(),
            complete: false,
        }
    }
}

async fn fetch_bounded(
    provider: Arc<dyn JobProvider>,
    query: &SearchQuery,
    timeout: Duration,
) -> Batch {
    let source = provider.source();
    let started = Instant::now();
    match tokio::time::timeout(timeout, provider.fetch_jobs(query)).await {
        Ok(jobs) => {
            tracing::debug!(
                %source,
                count = jobs.len(),
                elapsed_ms = %started.elapsed().as_millis(),
                "Provider answered"
            );
            Batch {
                complete: !jobs.is_empty(),
                jobs,
            }
        }
        Err(_) => {
            tracing::warn!(
                %source,
                timeout_ms = %timeout.as_millis(),
                "Provider timed out, dropping its results"
            );
            Batch::dropped()
        }
    }
}

/// Concatenate provider batches in order, sort newest first (undated last)
/// and list the distinct sources present.
pub fn merge(batches: Vec<Vec<CanonicalJob>>) -> SearchResult {
    let mut jobs: Vec<CanonicalJob> = batches.into_iter().flatten().collect();
    // Option orders None below Some, so undated records sink to the end.
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));

    let mut sources: Vec<String> = Vec::new();
    for job in &jobs {
        if !sources.contains(&job.source) {
            sources.push(job.source.clone());
        }
    }

    SearchResult {
        total_count: jobs.len(),
        sources,
        jobs,
    }
}

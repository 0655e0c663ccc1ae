use std::time::Duration;

use jobhub_core::error::AppError;
use jobhub_core::models::CanonicalJob;
use jobhub_core::source::JobSource;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const USER_AGENT: &str = "Jobhub/0.1 (job aggregator)";

/// Build the reqwest client shared by one adapter.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::HttpError(e.to_string()))
}

/// Join `path` onto a base URL and attach query parameters.
pub(crate) fn endpoint(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Url, AppError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse_with_params(&raw, params.iter().map(|(k, v)| (*k, v.as_str())))
        .map_err(|e| AppError::ConfigError(format!("Invalid provider URL {raw}: {e}")))
}

/// Send a request and return the body of a successful response.
pub(crate) async fn send(
    request: RequestBuilder,
    source: JobSource,
    timeout: Duration,
) -> Result<String, AppError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            AppError::Timeout(timeout)
        } else if e.is_connect() {
            AppError::NetworkError(format!("Connection failed: {e}"))
        } else {
            AppError::HttpError(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::ProviderError {
            provider: source.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            AppError::Timeout(timeout)
        } else {
            AppError::HttpError(format!("Failed to read response body: {e}"))
        }
    })
}

/// Decode each raw record on its own. Records that are not JSON objects, or
/// that `T` still rejects, are skipped; record fields use the `lenient`
/// decoders so a single bad field does not cost the whole record.
pub(crate) fn decode_records<T: DeserializeOwned>(
    source: JobSource,
    records: Vec<serde_json::Value>,
) -> Vec<T> {
    records
        .into_iter()
        .filter(|value| {
            let is_object = value.is_object();
            if !is_object {
                tracing::debug!(%source, "Skipping non-object record");
            }
            is_object
        })
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(%source, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}

/// Collapse a fetch outcome into the list handed to the aggregator.
pub(crate) fn settle(source: JobSource, outcome: Result<Vec<CanonicalJob>, AppError>) -> Vec<CanonicalJob> {
    match outcome {
        Ok(jobs) => {
            tracing::debug!(%source, count = jobs.len(), "Provider answered");
            jobs
        }
        Err(e) if e.is_provider_failure() => {
            tracing::warn!(%source, error = %e, "Provider fetch failed; contributing no jobs");
            Vec::new()
        }
        Err(e) => {
            tracing::error!(%source, error = %e, "Provider misconfigured; contributing no jobs");
            Vec::new()
        }
    }
}

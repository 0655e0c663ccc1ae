pub mod arbeitnow;
pub mod config;
mod http;
pub mod jsearch;
mod lenient;
pub mod normalize;
pub mod remotive;

#[cfg(test)]
mod testserver;

use std::sync::Arc;

use jobhub_core::{AppError, JobProvider};

pub use arbeitnow::ArbeitnowProvider;
pub use config::ProviderConfig;
pub use jsearch::JSearchProvider;
pub use remotive::RemotiveProvider;

/// Build every known provider, in registration order.
pub fn build_providers(config: &ProviderConfig) -> Result<Vec<Arc<dyn JobProvider>>, AppError> {
    let providers: Vec<Arc<dyn JobProvider>> = vec![
        Arc::new(RemotiveProvider::new(
            config.remotive_base_url.clone(),
            config.request_timeout,
        )?),
        Arc::new(ArbeitnowProvider::new(
            config.arbeitnow_base_url.clone(),
            config.request_timeout,
        )?),
        Arc::new(JSearchProvider::new(
            config.jsearch_base_url.clone(),
            config.jsearch_host.clone(),
            config.jsearch_api_key.clone(),
            config.request_timeout,
        )?),
    ];
    Ok(providers)
}

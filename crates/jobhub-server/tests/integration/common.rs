use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use jobhub_core::testutil::{MockPostingStore, MockProfileStore};
use jobhub_core::{Aggregator, JobProvider, SkillAdvisor};
use jobhub_server::routes;
use jobhub_server::state::AppState;

/// Router wired to in-memory providers and stores.
pub struct TestApp {
    pub router: Router,
}

pub struct TestAppBuilder {
    providers: Vec<Arc<dyn JobProvider>>,
    postings: MockPostingStore,
    profiles: MockProfileStore,
    timeout: Duration,
    with_stores: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            postings: MockPostingStore::new(Vec::new()),
            profiles: MockProfileStore::new(),
            timeout: Duration::from_secs(2),
            with_stores: true,
        }
    }

    pub fn provider(mut self, provider: impl JobProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn postings(mut self, postings: MockPostingStore) -> Self {
        self.postings = postings;
        self
    }

    pub fn profiles(mut self, profiles: MockProfileStore) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run without posting and profile stores, as the server does without a database.
    pub fn without_stores(mut self) -> Self {
        self.with_stores = false;
        self
    }

    pub fn build(self) -> TestApp {
        let state = Arc::new(AppState {
            aggregator: Aggregator::new(self.providers).with_timeout(self.timeout),
            advisor: self
                .with_stores
                .then(|| SkillAdvisor::new(Arc::new(self.postings), Arc::new(self.profiles))),
            db: None,
        });
        TestApp {
            router: routes::router(state),
        }
    }
}

/// Send a GET with optional `X-User-Id` and return status plus JSON body.
pub async fn get_json(
    router: Router,
    uri: &str,
    user_id: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::get(uri);
    if let Some(id) = user_id {
        request = request.header("x-user-id", id);
    }
    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

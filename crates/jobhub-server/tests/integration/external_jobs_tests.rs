use std::time::Duration;

use axum::http::StatusCode;
use jobhub_core::JobSource;
use jobhub_core::testutil::{MockProvider, make_external_job, march};

use crate::integration::common::{TestAppBuilder, get_json};

fn three_providers() -> TestAppBuilder {
    TestAppBuilder::new()
        .provider(MockProvider::new(
            JobSource::Remotive,
            vec![
                make_external_job("Remotive", "Rust Engineer", Some(march(3))),
                make_external_job("Remotive", "Undated Role", None),
            ],
        ))
        .provider(MockProvider::new(
            JobSource::Arbeitnow,
            vec![make_external_job("Arbeitnow", "Go Developer", Some(march(9)))],
        ))
        .provider(MockProvider::new(
            JobSource::JSearch,
            vec![make_external_job("LinkedIn", "Data Engineer", Some(march(5)))],
        ))
}

fn titles(json: &serde_json::Value) -> Vec<String> {
    json["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn search_merges_all_providers_newest_first() {
    let app = three_providers().build();

    let (status, json) = get_json(app.router, "/external-jobs/search?keyword=engineer", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalCount"], 4);
    assert_eq!(
        titles(&json),
        vec!["Go Developer", "Data Engineer", "Rust Engineer", "Undated Role"]
    );
    assert_eq!(json["sources"], serde_json::json!(["Arbeitnow", "LinkedIn", "Remotive"]));
    assert!(json["jobs"][3]["postedAt"].is_null());
    assert_eq!(json["jobs"][0]["applyUrl"], "https://jobs.example.com/Go-Developer");
}

#[tokio::test]
async fn source_filter_limits_providers() {
    let app = three_providers().build();

    let (status, json) =
        get_json(app.router, "/external-jobs/search?source=remotive,jsearch", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalCount"], 3);
    assert_eq!(json["sources"], serde_json::json!(["LinkedIn", "Remotive"]));
}

#[tokio::test]
async fn unknown_source_falls_back_to_all() {
    let app = three_providers().build();

    let (_, json) = get_json(app.router, "/external-jobs/search?source=monster", None).await;

    assert_eq!(json["totalCount"], 4);
}

#[tokio::test]
async fn failing_and_slow_providers_are_dropped() {
    let app = TestAppBuilder::new()
        .provider(MockProvider::failing(JobSource::Remotive))
        .provider(MockProvider::slow(
            JobSource::Arbeitnow,
            vec![make_external_job("Arbeitnow", "Too Late", Some(march(20)))],
            Duration::from_secs(5),
        ))
        .provider(MockProvider::new(
            JobSource::JSearch,
            vec![make_external_job("Indeed", "On Time", Some(march(1)))],
        ))
        .timeout(Duration::from_millis(200))
        .build();

    let (status, json) = get_json(app.router, "/external-jobs/search", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["On Time"]);
    assert_eq!(json["sources"], serde_json::json!(["Indeed"]));
}

#[tokio::test]
async fn all_providers_failing_is_still_200() {
    let app = TestAppBuilder::new()
        .provider(MockProvider::failing(JobSource::Remotive))
        .provider(MockProvider::failing(JobSource::Arbeitnow))
        .build();

    let (status, json) = get_json(app.router, "/external-jobs/search?keyword=x", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "totalCount": 0, "sources": [], "jobs": [] })
    );
}

#[tokio::test]
async fn sources_lists_all_then_each_provider() {
    let app = TestAppBuilder::new().build();

    let (status, json) = get_json(app.router, "/external-jobs/sources", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["all", "remotive", "arbeitnow", "jsearch"]);
    assert_eq!(json[0]["isDefault"], true);
    assert_eq!(json[1]["isDefault"], false);
}

#[tokio::test]
async fn health_without_database() {
    let app = TestAppBuilder::new().build();

    let (status, json) = get_json(app.router, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "not_configured");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestAppBuilder::new().build();

    let (status, json) = get_json(app.router, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/external-jobs/search"].is_object());
    assert!(json["paths"]["/profile/skill-suggestions"].is_object());
}

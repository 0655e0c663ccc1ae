use axum::http::StatusCode;
use jobhub_core::testutil::{MockPostingStore, MockProfileStore, make_posting, march};
use uuid::Uuid;

use crate::integration::common::{TestAppBuilder, get_json};

fn postings() -> MockPostingStore {
    MockPostingStore::new(vec![
        make_posting("Backend Engineer", "Services in Rust", "Rust, PostgreSQL, Docker", march(1)),
        make_posting("Data Analyst", "Dashboards", "SQL; Python | Docker", march(2)),
        make_posting("Designer", "Figma work", "Figma", march(3)),
    ])
}

#[tokio::test]
async fn profile_routes_require_user_id() {
    for uri in ["/profile/recommendations", "/profile/skill-suggestions"] {
        let app = TestAppBuilder::new().build();
        let (status, json) = get_json(app.router, uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(json["error"], "unauthorized");

        let app = TestAppBuilder::new().build();
        let (status, _) = get_json(app.router, uri, Some("not-a-uuid")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn recommendations_rank_by_match_score() {
    let user = Uuid::new_v4();
    let app = TestAppBuilder::new()
        .postings(postings())
        .profiles(MockProfileStore::new().with_profile(user, "Docker, sql, rust"))
        .build();

    let (status, json) =
        get_json(app.router, "/profile/recommendations", Some(&user.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasSkills"], true);
    assert_eq!(json["userSkills"], serde_json::json!(["docker", "sql", "rust"]));
    assert_eq!(json["message"], "Found 2 jobs matching your skills.");

    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    // "sql" also matches "PostgreSQL".
    assert_eq!(recs[0]["title"], "Backend Engineer");
    assert_eq!(recs[0]["matchScore"], 3);
    assert_eq!(recs[0]["matchedSkills"], serde_json::json!(["docker", "sql", "rust"]));
    assert_eq!(recs[1]["title"], "Data Analyst");
    assert_eq!(recs[1]["matchScore"], 2);
    assert_eq!(recs[1]["workLocation"], "Remote");
}

#[tokio::test]
async fn recommendations_without_profile_fall_back_to_latest() {
    let app = TestAppBuilder::new().postings(postings()).build();

    let (status, json) = get_json(
        app.router,
        "/profile/recommendations",
        Some(&Uuid::new_v4().to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasSkills"], false);
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["title"], "Designer");
    assert!(recs.iter().all(|r| r["matchScore"] == 0));
}

#[tokio::test]
async fn skill_suggestions_exclude_known_skills() {
    let user = Uuid::new_v4();
    let app = TestAppBuilder::new()
        .postings(postings())
        .profiles(MockProfileStore::new().with_profile(user, "docker"))
        .build();

    let (status, json) =
        get_json(app.router, "/profile/skill-suggestions", Some(&user.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["userSkills"], serde_json::json!(["docker"]));
    let skills: Vec<_> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["skill"].as_str().unwrap())
        .collect();
    assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("docker")));
    assert!(skills.contains(&"Figma"));
    assert_eq!(json["suggestions"][0]["demandLevel"], "Low");
}

#[tokio::test]
async fn store_failure_is_500() {
    let app = TestAppBuilder::new()
        .postings(MockPostingStore::unavailable("connection refused"))
        .build();

    let (status, json) = get_json(
        app.router,
        "/profile/skill-suggestions",
        Some(&Uuid::new_v4().to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "database_error");
}

#[tokio::test]
async fn profile_routes_without_database_are_config_errors() {
    let user = Uuid::new_v4().to_string();
    for uri in ["/profile/recommendations", "/profile/skill-suggestions"] {
        let app = TestAppBuilder::new().without_stores().build();
        let (status, json) = get_json(app.router, uri, Some(&user)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["error"], "config_error");
    }

    let app = TestAppBuilder::new().without_stores().build();
    let (status, json) = get_json(app.router, "/external-jobs/sources", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(4));
}

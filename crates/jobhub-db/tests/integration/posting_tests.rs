use chrono::{TimeZone, Utc};
use jobhub_core::traits::JobPostingStore;
use jobhub_db::{Database, PostingRepository};
use sqlx::PgPool;
use uuid::Uuid;

use crate::integration::common::setup_test_db;

async fn insert_posting(pool: &PgPool, title: &str, requirements: &str, day: u32, salary: Option<&str>) {
    sqlx::query(
        r#"
        INSERT INTO job_postings (employer_id, title, description, requirements, work_location, salary_range, posted_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(format!("{title} description"))
    .bind(requirements)
    .bind("Lisbon")
    .bind(salary)
    .bind(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap())
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn lists_postings_newest_first() {
    let (pool, _container) = setup_test_db().await;
    insert_posting(&pool, "Middle", "Go", 10, None).await;
    insert_posting(&pool, "Oldest", "Rust", 2, Some("€50k")).await;
    insert_posting(&pool, "Newest", "SQL, Python", 20, None).await;

    let repo = PostingRepository::new(pool);
    let postings = repo.list_postings().await.unwrap();

    let titles: Vec<_> = postings.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    assert_eq!(postings[2].salary_range.as_deref(), Some("€50k"));
    assert_eq!(postings[0].work_location, "Lisbon");
    assert_eq!(postings[0].requirements, "SQL, Python");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn empty_table_lists_nothing() {
    let (pool, _container) = setup_test_db().await;
    let db = Database::from_pool(pool);

    assert!(db.posting_repo().list().await.unwrap().is_empty());
    db.health_check().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn closed_pool_reports_database_error() {
    let (pool, _container) = setup_test_db().await;
    pool.close().await;

    let err = PostingRepository::new(pool).list().await.unwrap_err();
    assert!(matches!(err, jobhub_core::AppError::DatabaseError(_)));
}

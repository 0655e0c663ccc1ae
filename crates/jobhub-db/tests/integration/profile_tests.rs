use jobhub_core::traits::SkillProfileStore;
use jobhub_db::ProfileRepository;
use sqlx::PgPool;
use uuid::Uuid;

use crate::integration::common::setup_test_db;

async fn insert_profile(pool: &PgPool, user_id: Uuid, skills: Option<&str>) {
    sqlx::query("INSERT INTO skill_profiles (user_id, skills) VALUES ($1, $2)")
        .bind(user_id)
        .bind(skills)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn reads_and_normalizes_stored_skills() {
    let (pool, _container) = setup_test_db().await;
    let user = Uuid::new_v4();
    insert_profile(&pool, user, Some(" Rust, SQL ,,rust ")).await;

    let repo = ProfileRepository::new(pool);

    assert_eq!(
        repo.get_skills(user).await.unwrap().as_deref(),
        Some(" Rust, SQL ,,rust ")
    );
    let skills = repo.skill_set(user).await.unwrap();
    assert_eq!(skills.to_vec(), vec!["rust", "sql"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn missing_profile_and_null_skills_are_empty() {
    let (pool, _container) = setup_test_db().await;
    let with_null = Uuid::new_v4();
    insert_profile(&pool, with_null, None).await;

    let repo = ProfileRepository::new(pool);

    assert!(repo.get_skills(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo.get_skills(with_null).await.unwrap().is_none());
    assert!(repo.skill_set(with_null).await.unwrap().is_empty());
}

use async_trait::async_trait;
use jobhub_core::error::AppError;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

/// Read access to the `skill_profiles` table.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: Pool<Postgres>,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The raw skills string for `user_id`. `None` when there is no profile
    /// row or the column is NULL.
    pub async fn skills_for(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT skills FROM skill_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.and_then(|(skills,)| skills))
    }
}

#[async_trait]
impl jobhub_core::traits::SkillProfileStore for ProfileRepository {
    async fn get_skills(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        ProfileRepository::skills_for(self, user_id).await
    }
}

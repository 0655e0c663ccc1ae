use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobhub_core::error::AppError;
use jobhub_core::models::LocalJobPosting;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

/// Read access to the `job_postings` table.
#[derive(Clone)]
pub struct PostingRepository {
    pool: Pool<Postgres>,
}

impl PostingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All postings, newest first.
    pub async fn list(&self) -> Result<Vec<LocalJobPosting>, AppError> {
        let rows = sqlx::query_as::<_, PostingRow>(
            r#"
            SELECT id, title, description, requirements, work_location, salary_range, posted_at, employer_id
            FROM job_postings
            ORDER BY posted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct PostingRow {
    id: Uuid,
    title: String,
    description: String,
    requirements: String,
    work_location: String,
    salary_range: Option<String>,
    posted_at: DateTime<Utc>,
    employer_id: Uuid,
}

impl From<PostingRow> for LocalJobPosting {
    fn from(row: PostingRow) -> Self {
        LocalJobPosting {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            work_location: row.work_location,
            salary_range: row.salary_range,
            posted_at: row.posted_at,
            employer_id: row.employer_id,
        }
    }
}

// -- Trait implementation --

#[async_trait]
impl jobhub_core::traits::JobPostingStore for PostingRepository {
    async fn list_postings(&self) -> Result<Vec<LocalJobPosting>, AppError> {
        PostingRepository::list(self).await
    }
}

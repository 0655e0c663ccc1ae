use jobhub_core::{Aggregator, AppError, SkillAdvisor};
use jobhub_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub aggregator: Aggregator,
    /// `None` when the server runs without a database; profile routes then fail.
    pub advisor: Option<SkillAdvisor>,
    /// Pool used by `/health`. `None` when the stores are not database-backed.
    pub db: Option<Database>,
}

impl AppState {
    pub fn advisor(&self) -> Result<&SkillAdvisor, AppError> {
        self.advisor.as_ref().ok_or_else(|| {
            AppError::ConfigError(
                "DATABASE_URL not set; recommendations and skill suggestions are unavailable"
                    .into(),
            )
        })
    }
}

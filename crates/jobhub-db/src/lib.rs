pub mod config;
pub mod database;
pub mod posting_repository;
pub mod profile_repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use posting_repository::PostingRepository;
pub use profile_repository::ProfileRepository;

pub mod advisor;
pub mod aggregate;
pub mod cache;
pub mod demand;
pub mod error;
pub mod models;
pub mod relevance;
pub mod skills;
pub mod source;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
pub mod text;
pub mod traits;

pub use advisor::SkillAdvisor;
pub use aggregate::Aggregator;
pub use cache::SearchCache;
pub use error::AppError;
pub use models::{CanonicalJob, LocalJobPosting, SearchQuery, SearchResult};
pub use skills::SkillSet;
pub use source::{JobSource, SourceDescriptor, SourceFilter};
pub use traits::{JobPostingStore, JobProvider, SkillProfileStore};

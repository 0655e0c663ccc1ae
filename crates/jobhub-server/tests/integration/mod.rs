pub mod common;
mod external_jobs_tests;
mod profile_tests;

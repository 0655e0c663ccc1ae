pub mod common;
mod posting_tests;
mod profile_tests;

//! Property-based tests for search and formatting.

mod format_tests;
mod search_tests;

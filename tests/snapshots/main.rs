//! Snapshot tests for user-facing text.

mod error_messages;
mod panel_output;

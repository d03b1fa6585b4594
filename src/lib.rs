//! japflix - search a movie catalog from the terminal.
//!
//! The catalog is fetched once at startup ([`catalog`]), searched with an
//! accent- and case-insensitive substring match ([`search`]), and shown
//! either as plain output ([`cli`]) or in an interactive browser ([`tui`]).

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod search;
pub mod tui;
pub mod view;

pub use error::{JfError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Terminal user interface for browsing the catalog.

pub mod browse;

pub use browse::{BrowseTui, ensure_terminal, run_browse_tui};

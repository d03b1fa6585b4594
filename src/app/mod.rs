//! Application layer: per-run context and the session state machine.

mod context;
mod state;

pub use context::AppContext;
pub use state::{Action, AppState, Screen};

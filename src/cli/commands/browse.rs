//! japflix browse - Interactive search TUI

use clap::Args;

use crate::app::{AppContext, AppState};
use crate::error::Result;
use crate::tui::{ensure_terminal, run_browse_tui};

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Submit this query as soon as the catalog is loaded
    #[arg(long)]
    pub query: Option<String>,
}

pub fn run(ctx: &AppContext, args: &BrowseArgs) -> Result<()> {
    ensure_terminal()?;

    // The fetch blocks before the terminal switches screens, so a failure
    // is logged where the operator can still read it.
    let state = AppState::from_outcome(ctx.load_catalog());
    run_browse_tui(state, ctx.star_style(), args.query.as_deref())
}

//! japflix search - Print the result list for one query

use clap::Args;
use serde::Serialize;

use super::{list_lines, load_warnings};
use crate::app::{Action, AppContext, AppState};
use crate::cli::OutputFormat;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::view::ListEntry;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles, taglines, overviews and genres
    pub query: String,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    entries: &'a [ListEntry],
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let mut state = AppState::from_outcome(ctx.load_catalog());
    state.dispatch(Action::Submit(args.query.clone()));

    match ctx.output_format {
        OutputFormat::Json => {
            let output = SearchOutput {
                query: state.query(),
                count: state.results().len(),
                entries: state.list().entries(),
            };
            emit_json(&robot_ok(output).with_warnings(load_warnings(&state)))
        }
        OutputFormat::Human | OutputFormat::Plain => {
            for line in list_lines(
                state.list(),
                ctx.star_style(),
                ctx.output_format.use_colors(),
            ) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

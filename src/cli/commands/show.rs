//! japflix show - Print the detail panel of one search result

use clap::Args;
use serde::Serialize;

use super::{detail_lines, load_warnings};
use crate::app::{Action, AppContext, AppState};
use crate::cli::OutputFormat;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::{JfError, Result};
use crate::view::DetailView;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Text to look for in titles, taglines, overviews and genres
    pub query: String,

    /// Which result to show (0-based position in the result list)
    #[arg(long, short = 'n', default_value = "0")]
    pub index: usize,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    query: &'a str,
    /// Position of the movie in the catalog.
    catalog_index: usize,
    detail: &'a DetailView,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let mut state = AppState::from_outcome(ctx.load_catalog());
    state.dispatch(Action::Submit(args.query.clone()));
    state.dispatch(Action::Select(args.index));

    let (Some(detail), Some(catalog_index)) = (state.detail(), state.list().activate(args.index))
    else {
        return Err(JfError::NotFound(format!(
            "no result at index {} for query '{}' ({} results)",
            args.index,
            state.query(),
            state.results().len()
        )));
    };

    match ctx.output_format {
        OutputFormat::Json => {
            let output = ShowOutput {
                query: state.query(),
                catalog_index,
                detail,
            };
            emit_json(&robot_ok(output).with_warnings(load_warnings(&state)))
        }
        OutputFormat::Human | OutputFormat::Plain => {
            for line in detail_lines(detail, ctx.star_style(), ctx.output_format.use_colors()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use colored::{ColoredString, Colorize};

use crate::app::{AppContext, AppState};
use crate::cli::Commands;
use crate::error::Result;
use crate::format::StarStyle;
use crate::view::{DetailView, ListEntry, ListView};

pub mod browse;
pub mod search;
pub mod show;

/// Run a parsed command; no subcommand means `browse`.
pub fn run(ctx: &AppContext, command: Option<&Commands>) -> Result<()> {
    match command {
        None => browse::run(ctx, &browse::BrowseArgs::default()),
        Some(Commands::Browse(args)) => browse::run(ctx, args),
        Some(Commands::Search(args)) => search::run(ctx, args),
        Some(Commands::Show(args)) => show::run(ctx, args),
    }
}

/// Warnings to attach to machine output.
pub(crate) fn load_warnings(state: &AppState) -> Vec<String> {
    state
        .load_error()
        .map(|reason| format!("catalog unavailable: {reason}"))
        .into_iter()
        .collect()
}

fn paint(text: &str, colors: bool, style: impl FnOnce(&str) -> ColoredString) -> String {
    if colors {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Lines of a rendered result list, numbered from 1.
pub(crate) fn list_lines(list: &ListView, stars: StarStyle, colors: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for (position, entry) in list.entries().iter().enumerate() {
        match entry {
            ListEntry::Movie(movie) => {
                lines.push(format!(
                    "{:>3}. {}  {}",
                    position + 1,
                    paint(&movie.title, colors, |s| s.bold()),
                    paint(&movie.stars.render(stars), colors, |s| s.yellow()),
                ));
                if !movie.tagline.is_empty() {
                    lines.push(format!(
                        "     {}",
                        paint(&movie.tagline, colors, |s| s.dimmed())
                    ));
                }
            }
            ListEntry::Placeholder { message } => {
                lines.push(paint(message, colors, |s| s.dimmed()));
            }
        }
    }
    lines
}

/// Lines of a rendered detail panel.
pub(crate) fn detail_lines(detail: &DetailView, stars: StarStyle, colors: bool) -> Vec<String> {
    let mut lines = vec![
        paint(&detail.title, colors, |s| s.bold()),
        "=".repeat(detail.title.chars().count().max(1)),
        paint(&detail.stars.render(stars), colors, |s| s.yellow()),
        String::new(),
    ];

    if !detail.overview.is_empty() {
        lines.push(detail.overview.clone());
        lines.push(String::new());
    }

    if !detail.genres.is_empty() {
        let tags = detail
            .genres
            .iter()
            .map(|genre| paint(&format!("[{genre}]"), colors, |s| s.cyan()))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(tags);
        lines.push(String::new());
    }

    for row in detail.metadata() {
        let label = format!("{}:", row.label);
        lines.push(format!(
            "{} {}",
            paint(&format!("{label:<9}"), colors, |s| s.dimmed()),
            row.value
        ));
    }

    lines
}

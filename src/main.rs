//! japflix - search a movie catalog from the terminal.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use japflix::Result;
use japflix::app::AppContext;
use japflix::cli::Cli;
use japflix::error::StructuredError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let format = cli.output_format();
    if !format.use_colors() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if format.is_machine_readable() {
                // Machine mode: JSON error output to stdout
                let structured = StructuredError::from(&e);
                println!(
                    "{}",
                    serde_json::to_string(&structured).unwrap_or_default()
                );
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    japflix::cli::commands::run(&ctx, cli.command.as_ref())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        // The browser owns the screen; only failures get through.
        0 if cli.is_interactive() => "error",
        0 => "warn,japflix=info",
        1 => "info,japflix=debug",
        2 => "debug,japflix=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

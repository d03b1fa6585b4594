use crate::catalog::{self, LoadOutcome};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::format::StarStyle;

/// Everything a command needs, resolved once from flags, environment and
/// config files.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        config.apply_cli_overrides(cli.catalog_url.as_deref(), cli.catalog_file.as_deref());

        tracing::debug!(
            url = %config.catalog.url,
            file = ?config.catalog.file,
            "resolved catalog source"
        );

        Ok(Self {
            config,
            output_format: cli.output_format(),
        })
    }

    /// Perform the one catalog fetch of this run.
    #[must_use]
    pub fn load_catalog(&self) -> LoadOutcome {
        catalog::load(&self.config.catalog)
    }

    #[must_use]
    pub const fn star_style(&self) -> StarStyle {
        self.output_format.star_style(self.config.display.ascii_stars)
    }
}

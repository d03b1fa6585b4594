//! Where the catalog document comes from.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{JfError, Result};

/// Upstream catalog location.
pub const DEFAULT_CATALOG_URL: &str = "https://japceibal.github.io/japflix_api/movies-data.json";

const USER_AGENT: &str = concat!("japflix/", env!("CARGO_PKG_VERSION"));

/// A place the raw catalog JSON can be read from.
pub trait CatalogSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Read the whole document.
    fn fetch(&self) -> Result<String>;
}

/// Single HTTP GET with no timeout and no retry.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        // reqwest's blocking client defaults to a 30s timeout; the catalog
        // fetch waits as long as the server does.
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(JfError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Catalog stored on local disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

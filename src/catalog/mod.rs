//! The movie catalog: fetched once at startup, immutable afterwards.
//!
//! Loading never fails outright. [`load`] returns a [`LoadOutcome`]; a
//! failed load is logged and degrades to an empty [`Catalog`], so searches
//! simply return nothing.

mod record;
mod source;

use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{JfError, Result};

pub use record::MovieRecord;
pub use source::{CatalogSource, DEFAULT_CATALOG_URL, FileSource, HttpSource};

/// Ordered, read-only collection of movies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    #[must_use]
    pub const fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// Parse a catalog document. The top-level value must be an array;
    /// elements are decoded leniently (see [`MovieRecord::from_value`]).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Array(items) => {
                let skipped = items.iter().filter(|item| !item.is_object()).count();
                if skipped > 0 {
                    tracing::warn!(skipped, "catalog contains non-object entries");
                }
                Ok(Self::new(
                    items.into_iter().map(MovieRecord::from_value).collect(),
                ))
            }
            other => Err(JfError::CatalogShape {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    #[must_use]
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Result of the single startup fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Catalog),
    Failed { source: String, reason: String },
}

impl LoadOutcome {
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }

    /// Consume the outcome. Failures are reported on the log and yield an
    /// empty catalog.
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::Loaded(catalog) => catalog,
            Self::Failed { source, reason } => {
                tracing::error!(%source, %reason, "failed to load movie catalog");
                Catalog::default()
            }
        }
    }
}

/// Fetch and parse the catalog from any source.
pub fn load_from(source: &dyn CatalogSource) -> LoadOutcome {
    let described = source.describe();
    tracing::debug!(source = %described, "loading catalog");

    match source.fetch().and_then(|body| Catalog::from_json_str(&body)) {
        Ok(catalog) => {
            tracing::info!(source = %described, movies = catalog.len(), "catalog loaded");
            LoadOutcome::Loaded(catalog)
        }
        Err(err) => LoadOutcome::Failed {
            source: described,
            reason: err.to_string(),
        },
    }
}

/// Load the catalog from the configured source: a local file when one is
/// set, the catalog URL otherwise.
#[must_use]
pub fn load(config: &CatalogConfig) -> LoadOutcome {
    if let Some(path) = &config.file {
        return load_from(&FileSource::new(path));
    }

    match HttpSource::new(&config.url) {
        Ok(source) => load_from(&source),
        Err(err) => LoadOutcome::Failed {
            source: config.url.clone(),
            reason: err.to_string(),
        },
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

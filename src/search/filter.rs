//! Substring filter over title, tagline, overview and genres.

use serde::Serialize;

use super::normalize::normalize;
use crate::catalog::{Catalog, MovieRecord};

/// Matches of one search, as catalog indices in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    indices: Vec<usize>,
}

impl ResultSet {
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the matches against the catalog they were computed from.
    pub fn records<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a MovieRecord)> + 'a {
        self.indices
            .iter()
            .filter_map(|&idx| catalog.get(idx).map(|movie| (idx, movie)))
    }
}

/// Every movie whose searchable text contains `query`, ignoring case and
/// accents. A query that folds to nothing matches nothing.
#[must_use]
pub fn filter(catalog: &Catalog, query: &str) -> ResultSet {
    let needle = normalize(Some(query));
    if needle.is_empty() {
        return ResultSet::default();
    }

    let indices = catalog
        .movies()
        .iter()
        .enumerate()
        .filter(|(_, movie)| matches(movie, &needle))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    tracing::debug!(query, matches = indices.len(), "filtered catalog");
    ResultSet { indices }
}

/// Whether an already-normalized needle occurs in any searchable field.
#[must_use]
pub fn matches(movie: &MovieRecord, needle: &str) -> bool {
    let genres = movie.genres.join(" ");

    [
        movie.title.as_deref(),
        movie.tagline.as_deref(),
        movie.overview.as_deref(),
        Some(genres.as_str()),
    ]
    .into_iter()
    .any(|field| normalize(field).contains(needle))
}

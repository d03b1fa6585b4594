//! View models for the result list and the detail panel.
//!
//! Both are rebuilt from scratch on every change; neither keeps anything
//! from a previous render.

use serde::Serialize;

use crate::catalog::{Catalog, MovieRecord};
use crate::format::{StarRating, format_money, format_runtime, format_year, to_stars};
use crate::search::ResultSet;

/// Text of the entry shown when a search matched nothing.
pub const NO_RESULTS: &str = "No results found.";

/// One displayed row of the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListEntry {
    Movie(MovieEntry),
    /// Not selectable.
    Placeholder { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieEntry {
    /// Position in the catalog.
    pub index: usize,
    pub title: String,
    pub tagline: String,
    pub stars: StarRating,
}

/// The rendered result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListView {
    entries: Vec<ListEntry>,
}

impl ListView {
    /// Render a result set. An empty set renders as a single placeholder.
    #[must_use]
    pub fn render(catalog: &Catalog, results: &ResultSet) -> Self {
        let mut entries: Vec<ListEntry> = results
            .records(catalog)
            .map(|(index, movie)| {
                ListEntry::Movie(MovieEntry {
                    index,
                    title: movie.title().to_string(),
                    tagline: movie.tagline().to_string(),
                    stars: to_stars(movie.vote_average),
                })
            })
            .collect();

        if entries.is_empty() {
            entries.push(ListEntry::Placeholder {
                message: NO_RESULTS.to_string(),
            });
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Number of entries that can be activated.
    #[must_use]
    pub fn selectable_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ListEntry::Movie(_)))
            .count()
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.entries.as_slice(), [ListEntry::Placeholder { .. }])
    }

    /// Catalog index behind the entry at `position`, if it is a movie.
    #[must_use]
    pub fn activate(&self, position: usize) -> Option<usize> {
        match self.entries.get(position)? {
            ListEntry::Movie(entry) => Some(entry.index),
            ListEntry::Placeholder { .. } => None,
        }
    }
}

/// Label/value pair in the detail panel's metadata section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the detail panel shows for one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub overview: String,
    /// One tag per genre, in source order, duplicates kept.
    pub genres: Vec<String>,
    pub stars: StarRating,
    pub year: String,
    pub runtime: String,
    pub budget: String,
    pub revenue: String,
}

impl DetailView {
    #[must_use]
    pub fn from_record(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title().to_string(),
            overview: movie.overview().to_string(),
            genres: movie.genres.clone(),
            stars: to_stars(movie.vote_average),
            year: format_year(movie.release_date.as_deref()),
            runtime: format_runtime(movie.runtime),
            budget: format_money(movie.budget),
            revenue: format_money(movie.revenue),
        }
    }

    /// Metadata rows in display order.
    #[must_use]
    pub fn metadata(&self) -> Vec<MetadataRow> {
        [
            ("Year", &self.year),
            ("Runtime", &self.runtime),
            ("Budget", &self.budget),
            ("Revenue", &self.revenue),
        ]
        .into_iter()
        .map(|(label, value)| MetadataRow {
            label,
            value: value.clone(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MovieRecord {
                title: Some("Pulp Fiction".into()),
                tagline: Some("Just because you are a character...".into()),
                genres: vec!["Crime".into()],
                vote_average: Some(8.9),
                ..MovieRecord::default()
            },
            MovieRecord {
                title: Some("Her".into()),
                genres: vec!["Drama".into()],
                vote_average: Some(8.0),
                ..MovieRecord::default()
            },
        ])
    }

    #[test]
    fn renders_one_entry_per_result() {
        let catalog = catalog();
        let view = ListView::render(&catalog, &filter(&catalog, "r"));

        assert_eq!(view.entries().len(), 2);
        assert_eq!(view.selectable_len(), 2);
        assert!(!view.is_placeholder());

        let ListEntry::Movie(first) = &view.entries()[0] else {
            panic!("expected movie entry");
        };
        assert_eq!(first.title, "Pulp Fiction");
        assert_eq!(first.tagline, "Just because you are a character...");
        assert_eq!(first.stars.to_string(), "★★★★☆");
    }

    #[test]
    fn empty_results_render_single_placeholder() {
        let catalog = catalog();
        let view = ListView::render(&catalog, &filter(&catalog, "western"));

        assert_eq!(view.entries().len(), 1);
        assert!(view.is_placeholder());
        assert_eq!(view.selectable_len(), 0);
        assert_eq!(view.activate(0), None);
        assert_eq!(
            view.entries()[0],
            ListEntry::Placeholder {
                message: NO_RESULTS.to_string()
            }
        );
    }

    #[test]
    fn activate_maps_position_to_catalog_index() {
        let catalog = catalog();
        let view = ListView::render(&catalog, &filter(&catalog, "drama"));
        assert_eq!(view.activate(0), Some(1));
        assert_eq!(view.activate(1), None);
    }

    #[test]
    fn detail_of_sparse_record_uses_sentinels() {
        let movie = MovieRecord {
            title: Some("Obscure".into()),
            budget: Some(0.0),
            ..MovieRecord::default()
        };
        let detail = DetailView::from_record(&movie);

        assert_eq!(detail.budget, "N/A");
        assert_eq!(detail.revenue, "N/A");
        assert_eq!(detail.runtime, "N/A");
        assert_eq!(detail.year, "N/A");
        assert_eq!(detail.overview, "");
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn detail_keeps_genre_order_and_duplicates() {
        let movie = MovieRecord {
            genres: vec!["Drama".into(), "Crime".into(), "Drama".into()],
            ..MovieRecord::default()
        };
        let detail = DetailView::from_record(&movie);
        assert_eq!(detail.genres, vec!["Drama", "Crime", "Drama"]);
    }

    #[test]
    fn detail_metadata_rows() {
        let movie = MovieRecord {
            release_date: Some("1994-09-10".into()),
            runtime: Some(154.0),
            budget: Some(8_000_000.0),
            revenue: Some(213_928_762.0),
            ..MovieRecord::default()
        };
        let rows = DetailView::from_record(&movie).metadata();

        let pairs: Vec<(&str, &str)> = rows.iter().map(|r| (r.label, r.value.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("Year", "1994"),
                ("Runtime", "154 min"),
                ("Budget", "$ 8,000,000"),
                ("Revenue", "$ 213,928,762"),
            ]
        );
    }
}

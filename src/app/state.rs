//! Application state and the action dispatch table.
//!
//! ```text
//!   Idle ──Submit──► Listing ──Select──► Detail
//!                     ▲  │ ▲               │
//!                     │  └─┘ Submit        │
//!                     └─────ClosePanel─────┘
//! ```
//!
//! [`AppState::dispatch`] is the only way state changes. Filtering and
//! formatting stay pure; the state just stores their output.

use crate::catalog::{Catalog, LoadOutcome, MovieRecord};
use crate::search::{ResultSet, filter};
use crate::view::{DetailView, ListView};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Nothing searched yet; the list is empty.
    Idle,
    /// A result list (possibly the "no results" placeholder) is showing.
    Listing,
    /// The detail panel is open over the list.
    Detail,
}

/// User intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a search with the raw input text.
    Submit(String),
    /// Activate the list entry at this position.
    Select(usize),
    ClosePanel,
}

/// Session state.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    load_error: Option<String>,
    screen: Screen,
    query: String,
    results: ResultSet,
    list: ListView,
    selected: Option<usize>,
    detail: Option<DetailView>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            load_error: None,
            screen: Screen::Idle,
            query: String::new(),
            results: ResultSet::default(),
            list: ListView::default(),
            selected: None,
            detail: None,
        }
    }

    /// Start a session from the startup fetch. A failed load leaves an empty
    /// catalog and remembers why, for the status line.
    #[must_use]
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        let load_error = outcome.failure_reason().map(str::to_string);
        let mut state = Self::new(outcome.into_catalog());
        state.load_error = load_error;
        state
    }

    /// Apply one action and return the screen it leads to.
    pub fn dispatch(&mut self, action: Action) -> Screen {
        let from = self.screen;
        match action {
            Action::Submit(raw) => self.submit(&raw),
            Action::Select(position) => self.select(position),
            Action::ClosePanel => self.close_panel(),
        }
        if from != self.screen {
            tracing::debug!(?from, to = ?self.screen, "screen transition");
        }
        self.screen
    }

    fn submit(&mut self, raw: &str) {
        self.query = raw.trim().to_string();
        self.results = filter(&self.catalog, &self.query);
        self.list = ListView::render(&self.catalog, &self.results);
        self.selected = None;
        self.detail = None;
        self.screen = Screen::Listing;
    }

    fn select(&mut self, position: usize) {
        if self.screen == Screen::Idle {
            return;
        }
        let Some(index) = self.list.activate(position) else {
            return;
        };
        let Some(movie) = self.catalog.get(index) else {
            return;
        };
        self.detail = Some(DetailView::from_record(movie));
        self.selected = Some(index);
        self.screen = Screen::Detail;
    }

    fn close_panel(&mut self) {
        if self.screen == Screen::Detail {
            self.detail = None;
            self.selected = None;
            self.screen = Screen::Listing;
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Trimmed text of the last submitted query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub const fn list(&self) -> &ListView {
        &self.list
    }

    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.selected.and_then(|idx| self.catalog.get(idx))
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }
}

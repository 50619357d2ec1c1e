//! Session state for the preference form and results viewer.
//!
//! All transitions are synchronous methods on [`Session`]; the network calls
//! live elsewhere and feed their outcomes back in through
//! [`Session::apply_options`] and [`Session::complete_search`].

use serde::{Deserialize, Serialize};

use crate::{ApiError, AppOptions, Movie, PreferenceField, UserPreferences};

pub const SUBMIT_LABEL: &str = "Discover Movies";
pub const SUBMIT_LABEL_LOADING: &str = "Analyzing Database...";
pub const PLACEHOLDER_TEXT: &str = "Your recommendations will appear here.";
pub const NO_MATCHES_TEXT: &str = "No movies found. Try different keywords!";

/// What the results area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing searched yet (or first search still in flight).
    Placeholder,
    /// A search completed with an empty result set.
    NoMatches,
    /// At least one movie to show.
    Grid,
}

/// Handle for one issued search. The sequence number identifies it when the
/// response comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub preferences: UserPreferences,
}

/// How a search completion was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Result set replaced with `count` movies.
    Applied { count: usize },
    /// Request failed; previous results kept.
    Failed,
    /// A newer search was issued after this one; completion ignored.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub options: AppOptions,
    pub preferences: UserPreferences,
    pub results: Vec<Movie>,
    pub loading: bool,
    pub has_searched: bool,
    pub selected: Option<Movie>,
    /// Index `selected` was picked at, when it came from the result set.
    #[serde(default)]
    selected_pos: Option<usize>,
    /// Sequence number of the most recently issued search (0 = none yet).
    latest_search: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the options response. On success the option lists are replaced
    /// and `genre`/`mood` are seeded with the first entry of each non-empty
    /// list. On failure the error is logged and nothing changes.
    pub fn apply_options(&mut self, outcome: Result<AppOptions, ApiError>) {
        match outcome {
            Ok(options) => {
                if let Some(first) = options.genres.first() {
                    self.preferences.genre = first.clone();
                }
                if let Some(first) = options.moods.first() {
                    self.preferences.mood = first.clone();
                }
                tracing::info!(
                    genres = options.genres.len(),
                    moods = options.moods.len(),
                    "options loaded"
                );
                self.options = options;
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching options");
            }
        }
    }

    pub fn update_field(&mut self, field: PreferenceField, value: String) {
        self.preferences.set(field, value);
    }

    /// Start a search: raise `loading`, mark that a search happened, drop the
    /// active selection. The returned ticket carries the preferences to send.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.loading = true;
        self.has_searched = true;
        self.dismiss();
        self.latest_search += 1;
        SearchTicket {
            seq: self.latest_search,
            preferences: self.preferences.clone(),
        }
    }

    /// Apply the response to the search numbered `seq`.
    ///
    /// Completions for anything but the latest search are dropped without
    /// touching `loading` or the result set.
    pub fn complete_search(
        &mut self,
        seq: u64,
        outcome: Result<Vec<Movie>, ApiError>,
    ) -> CompletionOutcome {
        if seq != self.latest_search {
            tracing::debug!(seq, latest = self.latest_search, "discarding stale search completion");
            return CompletionOutcome::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(movies) => {
                let count = movies.len();
                tracing::info!(seq, count, "search complete");
                self.results = movies;
                CompletionOutcome::Applied { count }
            }
            Err(e) => {
                tracing::error!(seq, error = %e, "error searching movies");
                CompletionOutcome::Failed
            }
        }
    }

    pub fn select(&mut self, movie: Movie) {
        self.selected = Some(movie);
        self.selected_pos = None;
    }

    /// Select the result at `index`. Returns false if out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.results.get(index) {
            Some(movie) => {
                self.selected = Some(movie.clone());
                self.selected_pos = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
        self.selected_pos = None;
    }

    /// Position of the active selection within the result set.
    ///
    /// Uses the index recorded by [`Session::select_index`] so duplicate ids
    /// in a response still resolve to the card that was opened.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        if let Some(pos) = self.selected_pos
            && self.results.get(pos) == Some(selected)
        {
            return Some(pos);
        }
        self.results.iter().position(|m| m == selected)
    }

    pub fn latest_search(&self) -> u64 {
        self.latest_search
    }

    pub fn results_view(&self) -> ResultsView {
        if !self.results.is_empty() {
            ResultsView::Grid
        } else if self.has_searched && !self.loading {
            ResultsView::NoMatches
        } else {
            ResultsView::Placeholder
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }
}

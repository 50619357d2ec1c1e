use movie_assistant_core::{ApiError, AppOptions, Movie, UserPreferences};

/// Commands sent from the TUI to the backend.
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// Fetch the selector option lists.
    FetchOptions,
    /// Run a search. `seq` comes from the session's search ticket.
    Recommend {
        seq: u64,
        preferences: UserPreferences,
    },
}

/// Events flowing from backend tasks to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    OptionsLoaded(Result<AppOptions, ApiError>),
    SearchComplete {
        seq: u64,
        result: Result<Vec<Movie>, ApiError>,
    },
}

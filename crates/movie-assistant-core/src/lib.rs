use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;
pub mod config_file;
pub mod mock;
pub mod state;

// Re-export for convenience
pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, RecommendationApi};
pub use state::{CompletionOutcome, ResultsView, SearchTicket, Session};

/// Selector values offered by the recommendation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppOptions {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
}

/// The four-field preference record submitted to the recommendation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub genre: String,
    pub mood: String,
    pub content: String,
    pub element: String,
}

/// Names one field of [`UserPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceField {
    Genre,
    Mood,
    Content,
    Element,
}

impl PreferenceField {
    pub fn all() -> &'static [PreferenceField] {
        &[
            PreferenceField::Genre,
            PreferenceField::Mood,
            PreferenceField::Content,
            PreferenceField::Element,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Genre => "Genre",
            Self::Mood => "Mood / Vibe",
            Self::Content => "Content / Topic",
            Self::Element => "Must-Have Element",
        }
    }
}

impl UserPreferences {
    pub fn get(&self, field: PreferenceField) -> &str {
        match field {
            PreferenceField::Genre => &self.genre,
            PreferenceField::Mood => &self.mood,
            PreferenceField::Content => &self.content,
            PreferenceField::Element => &self.element,
        }
    }

    /// Replace a single field. No validation: empty strings are accepted.
    pub fn set(&mut self, field: PreferenceField, value: String) {
        match field {
            PreferenceField::Genre => self.genre = value,
            PreferenceField::Mood => self.mood = value,
            PreferenceField::Content => self.content = value,
            PreferenceField::Element => self.element = value,
        }
    }
}

/// A scored recommendation returned by the service.
///
/// Only `id`, `title`, `overview` and `score` are guaranteed; the descriptive
/// fields fall back to their defaults when the server leaves them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Relevance in `[0, 1]`.
    pub score: f64,
    /// Space-delimited genre names.
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rating: f64,
    /// Minutes.
    #[serde(default)]
    pub runtime: u32,
}

impl Movie {
    /// Score as a rounded percentage, e.g. `0.874` -> `87`.
    pub fn match_percent(&self) -> u32 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Up to three genre tags for the detail view.
    pub fn genre_tags(&self) -> Vec<&str> {
        self.genres.split_whitespace().take(3).collect()
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_percent_rounds() {
        let movie = Movie {
            score: 0.874,
            ..Movie::default()
        };
        assert_eq!(movie.match_percent(), 87);

        let movie = Movie {
            score: 0.125,
            ..Movie::default()
        };
        assert_eq!(movie.match_percent(), 13);
    }

    #[test]
    fn genre_tags_takes_first_three() {
        let movie = Movie {
            genres: "Action Adventure  Science Fiction".into(),
            ..Movie::default()
        };
        assert_eq!(movie.genre_tags(), vec!["Action", "Adventure", "Science"]);
    }

    #[test]
    fn movie_tolerates_missing_descriptive_fields() {
        let json = r#"{"id": 19995, "title": "Avatar", "overview": "In the 22nd century...", "score": 0.41}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 19995);
        assert_eq!(movie.title, "Avatar");
        assert_eq!(movie.genres, "");
        assert_eq!(movie.runtime, 0);
    }

    #[test]
    fn preferences_serialize_with_wire_field_names() {
        let prefs = UserPreferences {
            genre: "Action".into(),
            mood: "Dark".into(),
            content: "Space".into(),
            element: "Robot".into(),
        };
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "genre": "Action",
                "mood": "Dark",
                "content": "Space",
                "element": "Robot",
            })
        );
    }

    #[test]
    fn set_replaces_only_named_field() {
        let mut prefs = UserPreferences::default();
        prefs.set(PreferenceField::Content, "Mafia".into());
        assert_eq!(prefs.get(PreferenceField::Content), "Mafia");
        assert_eq!(prefs.genre, "");
        assert_eq!(prefs.element, "");
    }

    #[test]
    fn status_error_includes_server_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some("models not loaded".into()),
        };
        assert_eq!(err.to_string(), "server returned 500: models not loaded");

        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 404");
    }
}

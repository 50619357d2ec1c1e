//! HTTP client for the recommendation service.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::{ApiError, AppOptions, Movie, UserPreferences};

/// Address the service listens on when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Per-request timeout when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The two calls the client makes against the recommendation service.
pub trait RecommendationApi: Send + Sync {
    /// `GET /api/options/`.
    fn fetch_options(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<AppOptions, ApiError>> + Send + '_>>;

    /// `POST /api/recommend/` with the preference record as the JSON body.
    fn recommend<'a>(
        &'a self,
        prefs: &'a UserPreferences,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Movie>, ApiError>> + Send + 'a>>;
}

/// reqwest-backed implementation of [`RecommendationApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client for `base_url` (scheme and host, optionally a path prefix).
    /// A trailing slash is ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("movie-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/api/{}/", self.base_url, name)
    }

    pub async fn get_options(&self) -> Result<AppOptions, ApiError> {
        let url = self.endpoint("options");
        tracing::debug!(%url, "fetching options");

        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        let resp = error_for_status(resp).await?;
        let options: AppOptions = resp.json().await?;

        tracing::debug!(
            genres = options.genres.len(),
            moods = options.moods.len(),
            "options received"
        );
        Ok(options)
    }

    pub async fn post_recommend(&self, prefs: &UserPreferences) -> Result<Vec<Movie>, ApiError> {
        let url = self.endpoint("recommend");
        tracing::debug!(
            %url,
            genre = %prefs.genre,
            mood = %prefs.mood,
            content = %prefs.content,
            element = %prefs.element,
            "requesting recommendations"
        );

        let resp = self
            .client
            .post(&url)
            .json(prefs)
            .timeout(self.timeout)
            .send()
            .await?;
        let resp = error_for_status(resp).await?;
        let movies: Vec<Movie> = resp.json().await?;

        tracing::debug!(count = movies.len(), "recommendations received");
        Ok(movies)
    }
}

impl RecommendationApi for ApiClient {
    fn fetch_options(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<AppOptions, ApiError>> + Send + '_>> {
        Box::pin(self.get_options())
    }

    fn recommend<'a>(
        &'a self,
        prefs: &'a UserPreferences,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Movie>, ApiError>> + Send + 'a>> {
        Box::pin(self.post_recommend(prefs))
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the server's
/// `{"error": "..."}` message when it sends one.
async fn error_for_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string));

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.endpoint("options"),
            "http://localhost:8000/api/options/"
        );
    }

    #[test]
    fn path_prefix_is_kept() {
        let client = ApiClient::new("https://example.org/movies", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.endpoint("recommend"),
            "https://example.org/movies/api/recommend/"
        );
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let err = ApiClient::new("127.0.0.1:8000", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(ref u) if u == "127.0.0.1:8000"));
    }
}

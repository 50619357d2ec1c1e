//! Mock recommendation service for testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::client::RecommendationApi;
use crate::{ApiError, AppOptions, Movie, UserPreferences};

/// A configurable canned response for [`MockApi`].
#[derive(Clone, Debug)]
pub enum MockResponse<T> {
    Ok(T),
    /// Simulate a non-2xx response.
    Status(u16, Option<String>),
}

impl<T: Clone> MockResponse<T> {
    fn to_result(&self) -> Result<T, ApiError> {
        match self {
            MockResponse::Ok(value) => Ok(value.clone()),
            MockResponse::Status(status, message) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// A hand-rolled mock implementing [`RecommendationApi`].
///
/// Recommendation responses are consumed in order; the last one repeats once
/// the sequence is exhausted. Every submitted preference record is kept so
/// tests can assert on the payload.
pub struct MockApi {
    options: MockResponse<AppOptions>,
    recommendations: Mutex<Vec<MockResponse<Vec<Movie>>>>,
    fallback: MockResponse<Vec<Movie>>,
    delay: Option<Duration>,
    submitted: Mutex<Vec<UserPreferences>>,
    options_calls: AtomicUsize,
}

impl MockApi {
    pub fn new(options: MockResponse<AppOptions>, recommend: MockResponse<Vec<Movie>>) -> Self {
        Self {
            options,
            recommendations: Mutex::new(Vec::new()),
            fallback: recommend,
            delay: None,
            submitted: Mutex::new(Vec::new()),
            options_calls: AtomicUsize::new(0),
        }
    }

    /// Return recommendation responses in order, repeating the last.
    pub fn with_sequence(
        options: MockResponse<AppOptions>,
        mut responses: Vec<MockResponse<Vec<Movie>>>,
    ) -> Self {
        let fallback = responses
            .last()
            .cloned()
            .unwrap_or(MockResponse::Ok(Vec::new()));
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        Self {
            recommendations: Mutex::new(responses),
            ..Self::new(options, fallback)
        }
    }

    /// Set simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn options_calls(&self) -> usize {
        self.options_calls.load(Ordering::SeqCst)
    }

    /// Preference records received so far, oldest first.
    pub fn submitted(&self) -> Vec<UserPreferences> {
        self.submitted
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl RecommendationApi for MockApi {
    fn fetch_options(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<AppOptions, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.options_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.options.to_result()
        })
    }

    fn recommend<'a>(
        &'a self,
        prefs: &'a UserPreferences,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Movie>, ApiError>> + Send + 'a>> {
        Box::pin(async move {
            if let Ok(mut submitted) = self.submitted.lock() {
                submitted.push(prefs.clone());
            }
            let response = self
                .recommendations
                .lock()
                .ok()
                .and_then(|mut r| r.pop())
                .unwrap_or_else(|| self.fallback.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            response.to_result()
        })
    }
}

//! Leaderboard HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::{ApiErrorResponse, Score, SubmitScoreRequest};

/// Leaderboard API client.
///
/// Provides methods for submitting scores and reading the ranking.
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    client: Client,
    base_url: String,
}

impl LeaderboardClient {
    /// Create a new leaderboard client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the leaderboard service (e.g.,
    ///   `"http://localhost:3000"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new leaderboard client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit a score.
    ///
    /// The server floors fractional values and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidScore` if the server rejects the value,
    /// or another error if the request fails.
    pub async fn submit_score(&self, score: f64) -> Result<Score, ClientError> {
        let url = format!("{}/scores", self.base_url);
        let request = SubmitScoreRequest { score };

        tracing::debug!(score = %score, "submitting score");

        let response = self.client.post(&url).json(&request).send().await?;

        Self::handle_response(response).await
    }

    /// Fetch the top scores, highest value first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports a failure.
    pub async fn top_scores(&self) -> Result<Vec<Score>, ClientError> {
        let url = format!("{}/scores", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the error body
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(body) if status == reqwest::StatusCode::BAD_REQUEST => {
                Err(ClientError::InvalidScore {
                    message: body.message,
                })
            }
            Ok(body) => Err(ClientError::Api {
                message: body.message,
                status: status.as_u16(),
            }),
            Err(_) => Err(ClientError::Api {
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

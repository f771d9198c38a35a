//! Mock Medilink API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::{BearerToken, Credentials};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockMedilinkClient::new().with_token("aaa.bbb.ccc").await;
/// let bearer = mock.login(&credentials).await?;
/// assert_eq!(mock.login_calls().await, 1);
/// ```
#[derive(Default)]
pub struct MockMedilinkClient {
    /// Token to return from login
    token: Arc<Mutex<Option<BearerToken>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of login calls for verification
    login_calls: Arc<Mutex<usize>>,
    /// Captured credentials for test assertions
    captured: Arc<Mutex<Vec<Credentials>>>,
}

impl MockMedilinkClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned by the next logins
    pub async fn with_token(self, token: &str) -> Self {
        *self.token.lock().await = Some(BearerToken {
            token: token.to_string(),
            user_id: None,
        });
        self
    }

    /// Configure an error for the next login only
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of login calls made
    pub async fn login_calls(&self) -> usize {
        *self.login_calls.lock().await
    }

    /// Credentials captured from login calls
    pub async fn captured(&self) -> Vec<Credentials> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockMedilinkClient {
    async fn login(&self, credentials: &Credentials) -> Result<BearerToken> {
        *self.login_calls.lock().await += 1;
        self.captured.lock().await.push(credentials.clone());

        if let Some(error) = self.error.lock().await.take() {
            return Err(error.into());
        }

        match self.token.lock().await.clone() {
            Some(token) => Ok(token),
            None => Err(ApiError::AuthenticationFailed(
                "mock has no token configured".to_string(),
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_token() {
        let mock = MockMedilinkClient::new().with_token("aaa.bbb.ccc").await;
        let credentials = Credentials {
            email: "pat@example.org".to_string(),
            password: "hunter2".to_string(),
        };

        let bearer = mock.login(&credentials).await.unwrap();
        assert_eq!(bearer.token, "aaa.bbb.ccc");
        assert_eq!(mock.login_calls().await, 1);
        assert_eq!(mock.captured().await[0].email, "pat@example.org");
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_on_first_use() {
        let mock = MockMedilinkClient::new()
            .with_token("aaa.bbb.ccc")
            .await
            .with_error(ApiError::Network("down".to_string()))
            .await;
        let credentials = Credentials {
            email: "pat@example.org".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(mock.login(&credentials).await.is_err());
        assert!(mock.login(&credentials).await.is_ok());
        assert_eq!(mock.login_calls().await, 2);
    }

    #[tokio::test]
    async fn test_mock_without_token_rejects() {
        let mock = MockMedilinkClient::new();
        let credentials = Credentials {
            email: "pat@example.org".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(mock.login(&credentials).await.is_err());
    }
}

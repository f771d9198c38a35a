//! Medilink API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use super::api::AuthApi;
use super::models::{BearerToken, Credentials};
use crate::error::{ApiError, Result};

/// Medilink API base URL
const API_BASE_URL: &str = "https://api.medilink.health/api/v1";

/// The platform throttles the login endpoint aggressively
const RATE_LIMIT_PER_SECOND: u32 = 2;

/// Fallback when the platform rejects credentials without a message
const GENERIC_REJECTION: &str = "Invalid email or password";

/// Medilink API client
pub struct MedilinkClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl MedilinkClient {
    /// Create a client against the production API
    pub fn new() -> Result<Self> {
        Self::with_host(None)
    }

    /// Create a client, optionally against a custom host (self-hosted
    /// deployments, local test servers)
    pub fn with_host(host: Option<&str>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let base_url = match host {
            Some(host) => format!("{}/api/v1", host.trim_end_matches('/')),
            None => API_BASE_URL.to_string(),
        };

        Ok(Self {
            http,
            base_url,
            rate_limiter,
        })
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AuthApi for MedilinkClient {
    async fn login(&self, credentials: &Credentials) -> Result<BearerToken> {
        self.rate_limiter.until_ready().await;

        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
            #[serde(rename = "userId", default)]
            user_id: Option<String>,
        }

        #[derive(Deserialize)]
        struct ErrorResponse {
            #[serde(default)]
            message: Option<String>,
        }

        let url = format!("{}/auth/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let response_text = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;

                let login: LoginResponse = serde_json::from_str(&response_text).map_err(|e| {
                    ApiError::InvalidResponse(format!(
                        "Failed to parse login response: {}. Body was: {}",
                        e, response_text
                    ))
                })?;

                Ok(BearerToken {
                    token: login.token,
                    user_id: login.user_id,
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
                // Surface the platform's message verbatim when it sends one
                let message = response
                    .text()
                    .await
                    .ok()
                    .and_then(|body| serde_json::from_str::<ErrorResponse>(&body).ok())
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| GENERIC_REJECTION.to_string());

                Err(ApiError::AuthenticationFailed(message).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

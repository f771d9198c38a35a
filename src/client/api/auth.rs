//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{BearerToken, Credentials};
use crate::error::Result;

/// Authentication operations for the Medilink API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> Result<BearerToken>;
}

//! Authentication models

use serde::Serialize;

/// Sign-in credentials, passed through to the platform as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

/// Bearer token returned by the authentication endpoint.
///
/// Opaque at this layer: decoding its payload into an identity is the session
/// module's job, and nothing else ever parses it.
#[derive(Debug, Clone)]
pub struct BearerToken {
    /// The token string
    pub token: String,

    /// Separate account identifier, when the platform returns one
    pub user_id: Option<String>,
}

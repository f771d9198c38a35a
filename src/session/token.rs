//! Bearer token payload decoding
//!
//! Tokens are `header.payload.signature` strings. Only the payload segment is
//! read, and the signature is never verified client-side: the issuer is
//! trusted over the transport, and the server re-verifies the token on every
//! authenticated request. A token that cannot be decoded yields no identity
//! at all; there is no partial decode.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::SessionError;

/// Account role decoded from the token.
///
/// Role matching is case-insensitive everywhere: `Admin`, `admin` and `ADMIN`
/// name the same role. Unrecognized roles are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    Other(String),
}

impl Role {
    /// Parse a raw role claim. Total: unknown strings become `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "doctor" => Role::Doctor,
            "patient" => Role::Patient,
            _ => Role::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
            Role::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded, trusted-for-display subset of token claims.
///
/// An `Identity` only ever exists as the product of a successful decode; it is
/// never assembled from loose fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Unique account identifier (email or user id)
    pub subject: String,

    /// Role governing the post-login landing route
    pub role: Role,

    /// Human-readable name, when the token carries one
    pub display_name: Option<String>,

    /// When the token was issued
    pub issued_at: Option<DateTime<Utc>>,

    /// When the token stops being valid
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    /// Lazily checked on access; there is no background expiry timer.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Claims carried in the token payload
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    role: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    iat: Option<i64>,
    exp: i64,
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    // Add padding if needed
    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Decode a bearer token's payload into an [`Identity`].
pub fn decode(token: &str) -> std::result::Result<Identity, SessionError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::TokenDecode(
            "expected three token segments".to_string(),
        ));
    }

    let payload_bytes = base64_decode_url(parts[1])
        .map_err(|e| SessionError::TokenDecode(format!("payload is not base64url: {}", e)))?;

    let claims: Claims = serde_json::from_slice(&payload_bytes)
        .map_err(|e| SessionError::TokenDecode(format!("payload is not valid claims JSON: {}", e)))?;

    let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| {
        SessionError::TokenDecode("expiration timestamp out of range".to_string())
    })?;

    let issued_at = match claims.iat {
        Some(iat) => Some(DateTime::from_timestamp(iat, 0).ok_or_else(|| {
            SessionError::TokenDecode("issued-at timestamp out of range".to_string())
        })?),
        None => None,
    };

    Ok(Identity {
        subject: claims.sub,
        role: Role::parse(&claims.role),
        display_name: claims.name,
        issued_at,
        expires_at,
    })
}

//! Error types for the mediop CLI

use thiserror::Error;

/// Result type alias for mediop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials rejected by the platform. Recoverable: the user may retry
    /// with different credentials.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Session-related errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// A token was received or restored but its payload could not be decoded.
    /// Never partially trusted: the session stays (or becomes) signed out.
    #[error("Bearer token could not be decoded: {0}")]
    TokenDecode(String),

    #[error("Session expired. Run `mediop login` to sign in again.")]
    Expired,

    #[error("Not signed in. Run `mediop login` to authenticate.")]
    NotAuthenticated,

    /// The durable store is not usable. Degraded mode: a session obtained in
    /// this process still works, but will not survive into the next one.
    #[error("Session storage is unavailable: {0}")]
    PersistenceUnavailable(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `mediop login` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_authentication_failed_message() {
        let err = ApiError::AuthenticationFailed("Invalid email or password".to_string());
        assert!(err.to_string().contains("Invalid email or password"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_invalid_response() {
        let err = ApiError::InvalidResponse("Missing field 'token'".to_string());
        assert!(err.to_string().contains("Missing field"));
    }

    #[test]
    fn test_session_error_token_decode() {
        let err = SessionError::TokenDecode("expected three segments".to_string());
        assert!(err.to_string().contains("decoded"));
        assert!(err.to_string().contains("expected three segments"));
    }

    #[test]
    fn test_session_error_expired_suggests_login() {
        let err = SessionError::Expired;
        assert!(err.to_string().contains("mediop login"));
    }

    #[test]
    fn test_session_error_not_authenticated_suggests_login() {
        let err = SessionError::NotAuthenticated;
        assert!(err.to_string().contains("mediop login"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("mediop login"));
    }

    #[test]
    fn test_config_error_save() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::AuthenticationFailed("rejected".to_string());
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::AuthenticationFailed(_)) => (),
            _ => panic!("Expected Error::Api(ApiError::AuthenticationFailed)"),
        }
    }

    #[test]
    fn test_error_from_session_error() {
        let session_err = SessionError::Expired;
        let err: Error = session_err.into();

        match err {
            Error::Session(SessionError::Expired) => (),
            _ => panic!("Expected Error::Session(SessionError::Expired)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}

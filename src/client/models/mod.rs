//! API data models

pub mod auth;

pub use auth::{BearerToken, Credentials};

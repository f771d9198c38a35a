//! API trait definitions

pub mod auth;

pub use auth::AuthApi;

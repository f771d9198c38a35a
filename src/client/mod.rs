//! Medilink API client

pub mod api;
pub mod medilink;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::AuthApi;
pub use medilink::MedilinkClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockMedilinkClient;
pub use models::{BearerToken, Credentials};

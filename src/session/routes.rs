//! Post-login landing route resolution
//!
//! Kept free of session state so the role-to-route policy can be tested as a
//! plain table.

use std::fmt;

use crate::session::token::{Identity, Role};

/// The first screen shown after authentication, chosen by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingRoute {
    /// Admin back-office
    Admin,
    /// Doctor dashboard
    Doctor,
    /// Patient home
    Patient,
    /// Signed in, but with a role the client does not recognize
    Home,
    /// No session: back to sign-in
    Login,
}

impl LandingRoute {
    pub fn as_path(&self) -> &'static str {
        match self {
            LandingRoute::Admin => "/admin",
            LandingRoute::Doctor => "/doctor",
            LandingRoute::Patient => "/patient",
            LandingRoute::Home => "/home",
            LandingRoute::Login => "/login",
        }
    }
}

impl fmt::Display for LandingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Resolve the landing route for an identity.
///
/// Pure and total: the same input always yields the same route, for every
/// role including unrecognized ones and the absent case.
pub fn resolve_landing_route(identity: Option<&Identity>) -> LandingRoute {
    match identity {
        None => LandingRoute::Login,
        Some(identity) => match &identity.role {
            Role::Admin => LandingRoute::Admin,
            Role::Doctor => LandingRoute::Doctor,
            Role::Patient => LandingRoute::Patient,
            Role::Other(_) => LandingRoute::Home,
        },
    }
}

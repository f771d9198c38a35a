//! Session state management
//!
//! Single source of truth for "is the user signed in, as whom, with what
//! token". The manager owns the in-memory session and is the sole writer of
//! the persisted auth state; the HTTP exchange and the durable store are
//! collaborators behind the [`AuthApi`] and [`SessionStore`] seams.

pub mod routes;
pub mod store;
pub mod token;

pub use routes::{LandingRoute, resolve_landing_route};
pub use store::{FileStore, MemoryStore, SessionStore};
pub use token::{Identity, Role};

use log::warn;

use crate::client::AuthApi;
use crate::client::models::Credentials;
use crate::config::PersistedAuth;
use crate::error::{Result, SessionError};

/// A live token with the identity decoded from it. The two fields are set
/// and cleared together; no reader can observe one without the other.
#[derive(Debug, Clone)]
struct ActiveSession {
    token: String,
    identity: Identity,
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Owner of the authenticated identity and bearer token.
///
/// All operations take `&mut self`: access is single-threaded and
/// cooperative, and a second `login` simply overwrites the first wholesale
/// when it resolves.
pub struct SessionManager<S: SessionStore> {
    store: S,
    current: Option<ActiveSession>,
}

impl<S: SessionStore> SessionManager<S> {
    /// Starts in `LoggedOut`; call [`restore`](Self::restore) to pick up a
    /// persisted session.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// Never fails: an absent, undecodable or expired persisted token
    /// resolves to `LoggedOut`, and a rejected token is erased from the
    /// store on every reject path so nothing dangling survives.
    pub fn restore(&mut self) -> SessionState {
        let persisted = match self.store.load() {
            Ok(Some(auth)) => auth,
            Ok(None) => return SessionState::LoggedOut,
            Err(err) => {
                warn!("session store unavailable during restore: {}", err);
                return SessionState::LoggedOut;
            }
        };

        let identity = match token::decode(&persisted.token) {
            Ok(identity) => identity,
            Err(err) => {
                warn!("discarding persisted token: {}", err);
                self.discard_persisted();
                return SessionState::LoggedOut;
            }
        };

        if identity.is_expired() {
            self.discard_persisted();
            return SessionState::LoggedOut;
        }

        self.current = Some(ActiveSession {
            token: persisted.token,
            identity,
        });
        SessionState::LoggedIn
    }

    /// Authenticate against the platform and install the resulting session.
    ///
    /// A rejected exchange or an undecodable token leaves the prior state
    /// fully intact: nothing is persisted and nothing is installed. On
    /// success the in-memory update is the commit point; a store that cannot
    /// be written leaves a session valid for this process only.
    pub async fn login(
        &mut self,
        api: &dyn AuthApi,
        credentials: &Credentials,
    ) -> Result<Identity> {
        let bearer = api.login(credentials).await?;
        let identity = token::decode(&bearer.token)?;

        if let Some(ref user_id) = bearer.user_id {
            // The token's subject is authoritative; the separate id is only
            // cross-checked for diagnostics.
            if *user_id != identity.subject {
                warn!(
                    "platform user id {} differs from token subject {}",
                    user_id, identity.subject
                );
            }
        }

        let persisted = PersistedAuth {
            token: bearer.token.clone(),
            subject: identity.subject.clone(),
            role: identity.role.as_str().to_string(),
            display_name: identity.display_name.clone(),
            expires_at: identity.expires_at,
        };
        if let Err(err) = self.store.save(&persisted) {
            warn!("session not persisted, valid for this process only: {}", err);
        }

        self.current = Some(ActiveSession {
            token: bearer.token,
            identity: identity.clone(),
        });
        Ok(identity)
    }

    /// Drop the session, in memory and in the store.
    ///
    /// Idempotent: signing out while signed out is a no-op. The in-memory
    /// transition always succeeds; store failures are logged, never raised.
    pub fn logout(&mut self) {
        self.current = None;
        self.discard_persisted();
    }

    /// Re-derived on every call so an expiry is observed on the next access,
    /// not on some timer.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|session| !session.identity.is_expired())
    }

    /// The signed-in identity, while the token is still valid.
    pub fn identity(&self) -> Option<&Identity> {
        self.current
            .as_ref()
            .filter(|session| !session.identity.is_expired())
            .map(|session| &session.identity)
    }

    /// The bearer token for presenting to the platform.
    pub fn bearer_token(&self) -> std::result::Result<&str, SessionError> {
        match &self.current {
            None => Err(SessionError::NotAuthenticated),
            Some(session) if session.identity.is_expired() => Err(SessionError::Expired),
            Some(session) => Ok(&session.token),
        }
    }

    fn discard_persisted(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!("failed to clear persisted session: {}", err);
        }
    }

    #[cfg(test)]
    fn install(&mut self, token: String, identity: Identity) {
        self.current = Some(ActiveSession { token, identity });
    }
}

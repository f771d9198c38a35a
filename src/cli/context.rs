//! Command execution context
//!
//! Restores the persisted session once per invocation so individual command
//! handlers do not repeat the store wiring.

use crate::cli::args::GlobalOptions;
use crate::session::{FileStore, SessionManager, SessionState};

/// Context for command execution holding the restored session.
pub struct CommandContext {
    /// Session manager over the file-backed store
    pub session: SessionManager<FileStore>,

    /// State reported by the startup restore
    pub restored: SessionState,
}

impl CommandContext {
    /// Build the session manager and run the startup restore.
    ///
    /// Commands decide for themselves whether an unauthenticated context is
    /// acceptable; the constructor never fails on a missing or rejected
    /// session.
    pub fn new(opts: &GlobalOptions) -> Self {
        let store = FileStore::new(opts.config.clone());
        let mut session = SessionManager::new(store);
        let restored = session.restore();

        Self { session, restored }
    }
}

//! Session domain model.
//!
//! The [`Session`] is the singleton runtime record of boot, authentication
//! and preference state for the current process. It lives for the lifetime
//! of the process and is never persisted; a restart starts from defaults.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Snapshot of the process-wide session state.
///
/// Owned exclusively by [`super::SessionStore`]; all other components hold
/// read-only clones and route every mutation through the store's operations.
/// `user` and `is_authenticated` are only ever written together, so any
/// snapshot carries a consistent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether the boot sequence has finished and the routed app is shown.
    pub is_booted: bool,
    /// The authenticated user, absent until sign-in.
    pub user: Option<User>,
    /// True iff `user` is present.
    pub is_authenticated: bool,
    /// Result of the native-host capability probe. False until probed.
    pub host_bridge_available: bool,
    /// Sound preference, independent of all other fields.
    pub sound_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_booted: false,
            user: None,
            is_authenticated: false,
            host_bridge_available: false,
            sound_enabled: true,
        }
    }
}

impl Session {
    /// Creates a fresh session with all fields at their defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

//! User domain model.
//!
//! Represents the authenticated operator of the interface. The record is
//! constructed fully populated by the sign-in flow; the store performs no
//! validation of its own.

use serde::{Deserialize, Serialize};

/// Access role attached to a user. Gates the admin-only route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// The session user.
///
/// `xp`, `streak` and `level` are display-only progression counters; nothing
/// in the runtime derives behavior from them. The email address is carried
/// as-is, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Experience points
    pub xp: u32,
    /// Consecutive-activity counter
    pub streak: u32,
    /// Derived display tier, starts at 1
    pub level: u32,
}

impl User {
    /// Whether this user may enter admin-only routes.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

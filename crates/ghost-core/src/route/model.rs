//! Route table for the client shell.
//!
//! Maps paths to routes, routes to the access level they require and to the
//! screen they render. The table is fixed; unknown paths resolve to the
//! not-found route.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The obscured admin path. Unauthorized visitors are redirected to the
/// not-found view so the route stays indistinguishable from a missing one.
pub const ADMIN_PATH: &str = "/acmawalkertorcedordobahia";

/// A navigable route of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    Chat,
    Tutor,
    Stats,
    Settings,
    Admin,
    NotFound,
}

/// The screen a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Dashboard,
    Chat,
    Tutor,
    Admin,
    NotFound,
}

/// Access required to enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    /// Authenticated and `role == ADMIN`.
    Admin,
}

impl Route {
    /// Resolves a path to its route. `/` is the login entry point; any
    /// unknown path is the catch-all not-found route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/chat" => Self::Chat,
            "/tutor" => Self::Tutor,
            "/stats" => Self::Stats,
            "/settings" => Self::Settings,
            ADMIN_PATH => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Chat => "/chat",
            Self::Tutor => "/tutor",
            Self::Stats => "/stats",
            Self::Settings => "/settings",
            Self::Admin => ADMIN_PATH,
            Self::NotFound => "/404",
        }
    }

    /// Access level required to enter this route.
    pub fn access(&self) -> Access {
        match self {
            Self::Login | Self::NotFound => Access::Public,
            Self::Dashboard | Self::Chat | Self::Tutor | Self::Stats | Self::Settings => {
                Access::Authenticated
            }
            Self::Admin => Access::Admin,
        }
    }

    /// The screen this route renders.
    ///
    /// `/stats` and `/settings` currently alias the dashboard screen in the
    /// routing table.
    pub fn view(&self) -> View {
        match self {
            Self::Login => View::Login,
            Self::Dashboard | Self::Stats | Self::Settings => View::Dashboard,
            Self::Chat => View::Chat,
            Self::Tutor => View::Tutor,
            Self::Admin => View::Admin,
            Self::NotFound => View::NotFound,
        }
    }
}

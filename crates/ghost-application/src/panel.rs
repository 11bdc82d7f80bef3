//! Dashboard and admin read models.
//!
//! Display figures for the operator dashboard and the restricted admin
//! panel, plus the panel's system controls. The admin metrics are static
//! set dressing; the controls forward over the host bridge fire-and-forget.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ghost_core::bridge::{HostBridge, HostCommand};
use ghost_core::user::User;

/// Numbers shown on the operator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub streak: u32,
    pub xp: u32,
    pub level: u32,
    pub missions: u32,
}

impl DashboardStats {
    /// Derives the dashboard figures from the session user.
    ///
    /// A missing profile, or a counter still at zero, falls back to the
    /// interface's placeholder figures.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            streak: user.map(|u| u.streak).filter(|v| *v > 0).unwrap_or(7),
            xp: user.map(|u| u.xp).filter(|v| *v > 0).unwrap_or(2450),
            level: user.map(|u| u.level).filter(|v| *v > 0).unwrap_or(12),
            missions: 23,
        }
    }
}

/// Static figures for the restricted panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMetrics {
    pub active_users: u32,
    pub requests_per_min: u32,
    pub database_gb: u32,
    pub alerts: u32,
}

impl Default for AdminMetrics {
    fn default() -> Self {
        Self {
            active_users: 1247,
            requests_per_min: 3842,
            database_gb: 847,
            alerts: 3,
        }
    }
}

/// The admin panel's backing service: metrics plus the two system
/// controls. Both controls are one-way signals; nothing comes back whether
/// a host is present or not.
pub struct AdminConsole {
    bridge: Arc<dyn HostBridge>,
}

impl AdminConsole {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self { bridge }
    }

    pub fn metrics(&self) -> AdminMetrics {
        AdminMetrics::default()
    }

    pub fn shutdown_pc(&self) {
        self.bridge.send(HostCommand::ShutdownPc, None);
    }

    pub fn restart_pc(&self) {
        self.bridge.send(HostCommand::RestartPc, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_core::bridge::ChannelBridge;
    use ghost_core::user::UserRole;

    fn veteran() -> User {
        User {
            id: "7".to_string(),
            name: "Veteran".to_string(),
            email: "veteran@ghost.sys".to_string(),
            role: UserRole::User,
            xp: 9000,
            streak: 30,
            level: 42,
        }
    }

    #[test]
    fn test_stats_fall_back_without_user() {
        let stats = DashboardStats::for_user(None);
        assert_eq!(stats.streak, 7);
        assert_eq!(stats.xp, 2450);
        assert_eq!(stats.level, 12);
        assert_eq!(stats.missions, 23);
    }

    #[test]
    fn test_fresh_profile_counters_fall_back() {
        // A brand-new operator has zeroed counters; those show the
        // placeholder figures. Level starts at 1 and is kept as-is.
        let fresh = User {
            xp: 0,
            streak: 0,
            level: 1,
            ..veteran()
        };
        let stats = DashboardStats::for_user(Some(&fresh));
        assert_eq!(stats.streak, 7);
        assert_eq!(stats.xp, 2450);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn test_populated_profile_passes_through() {
        let stats = DashboardStats::for_user(Some(&veteran()));
        assert_eq!(stats.streak, 30);
        assert_eq!(stats.xp, 9000);
        assert_eq!(stats.level, 42);
    }

    #[test]
    fn test_admin_controls_emit_host_commands() {
        let (bridge, mut rx) = ChannelBridge::new();
        let console = AdminConsole::new(Arc::new(bridge));

        console.shutdown_pc();
        console.restart_pc();

        assert_eq!(rx.try_recv().unwrap().command, HostCommand::ShutdownPc);
        assert_eq!(rx.try_recv().unwrap().command, HostCommand::RestartPc);
    }

    #[test]
    fn test_metrics_are_the_panel_figures() {
        let (bridge, _rx) = ChannelBridge::new();
        let console = AdminConsole::new(Arc::new(bridge));
        let metrics = console.metrics();
        assert_eq!(metrics.active_users, 1247);
        assert_eq!(metrics.requests_per_min, 3842);
        assert_eq!(metrics.database_gb, 847);
        assert_eq!(metrics.alerts, 3);
    }
}

//! Boot sequence for the client shell.
//!
//! Plays the scripted terminal lines at the configured pace, then marks
//! the session booted. Nothing real is initialized; the sequence exists to
//! be watched.

use std::sync::Arc;
use std::time::Duration;

use ghost_core::config::BootConfig;
use ghost_core::session::SessionStore;

/// Terminal lines shown while the interface spins up.
pub const BOOT_SCRIPT: &[&str] = &[
    "> GHOST NEURAL INTERFACE v2.0.77",
    "> Initializing Core Systems...",
    "> [OK] Memory Banks: 16TB Allocated",
    "> [OK] Neural Network: Online",
    "> [OK] Voice Recognition: Active",
    "> [OK] VLibras Integration: Standby",
    "> [OK] Teachable Machine: Ready",
    "> Loading User Protocols...",
    "> [OK] Security Layer: Encrypted",
    "> [OK] Accessibility Modules: Enabled",
    "> Running Integrity Check...",
    "> [████████████████████] 100%",
    "> System Ready. Welcome, Operator.",
    "> ENTERING GHOST INTERFACE...",
];

/// Drives the boot printout and flips the store's boot flag at the end.
///
/// Treating the flag as one-way is this use case's convention; the store
/// itself is a plain setter. Cancellation is the caller's concern —
/// dropping the future between lines leaves the store untouched.
pub struct BootSequence {
    store: Arc<SessionStore>,
    line_delay: Duration,
    finale_delay: Duration,
}

impl BootSequence {
    pub fn new(store: Arc<SessionStore>, config: &BootConfig) -> Self {
        Self {
            store,
            line_delay: config.line_delay(),
            finale_delay: config.finale_delay(),
        }
    }

    /// Plays the script, invoking `on_line` for each line in order, then
    /// marks the session booted.
    pub async fn run(&self, mut on_line: impl FnMut(&'static str)) {
        for line in BOOT_SCRIPT {
            on_line(line);
            tokio::time::sleep(self.line_delay).await;
        }
        tokio::time::sleep(self.finale_delay).await;

        self.store.set_booted(true);
        tracing::info!("boot sequence complete");
    }
}

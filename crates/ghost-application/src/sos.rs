//! S.O.S. alert simulation.
//!
//! Triggering the alert opens a simulated capture window (audio +
//! location), then reports which contacts were pinged. Nothing is actually
//! recorded or transmitted.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ghost_core::config::SosConfig;

use crate::settings::EmergencyContact;

/// Report produced once the simulated capture window closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosOutcome {
    /// Contacts the alert was "sent" to.
    pub notified: Vec<EmergencyContact>,
    /// Whether the location ping was attached. Always true in the
    /// simulation; kept so the report mirrors a real dispatch.
    pub location_sent: bool,
    pub dispatched_at: DateTime<Utc>,
}

/// Drives the S.O.S. flow.
pub struct SosUseCase {
    capture_delay: Duration,
}

impl SosUseCase {
    pub fn new(config: &SosConfig) -> Self {
        Self {
            capture_delay: config.capture_delay(),
        }
    }

    /// Simulates the capture window, then reports the dispatch.
    pub async fn dispatch(&self, contacts: &[EmergencyContact]) -> SosOutcome {
        tracing::warn!(
            contacts = contacts.len(),
            "S.O.S. triggered; capturing audio and location"
        );
        tokio::time::sleep(self.capture_delay).await;

        SosOutcome {
            notified: contacts.to_vec(),
            location_sent: true,
            dispatched_at: Utc::now(),
        }
    }
}

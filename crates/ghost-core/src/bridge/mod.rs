//! One-way command bridge to the native host.
//!
//! The interface speaks to its host (when one exists) through named
//! commands with an optional JSON payload. The contract is fire-and-forget:
//! no acknowledgement, no result, no error channel. When no host is
//! reachable a send is observable only as a diagnostic trace.

pub mod command;

pub use command::HostCommand;

use serde_json::Value;
use tokio::sync::mpsc;

/// Outbound message to the native host.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeMessage {
    pub command: HostCommand,
    pub payload: Option<Value>,
}

/// A one-way message-send abstraction over the native host boundary.
///
/// Implementations must never block or report back; callers treat every
/// send as already done. The capability probe consults [`is_available`]
/// before the frontend offers host-dependent controls.
///
/// [`is_available`]: HostBridge::is_available
pub trait HostBridge: Send + Sync {
    /// Whether a native host is reachable from this process.
    fn is_available(&self) -> bool;

    /// Forwards `command` to the host, fire-and-forget.
    fn send(&self, command: HostCommand, payload: Option<Value>);
}

/// Bridge used when the process runs without a native host.
///
/// Always unavailable; sends are dropped with a diagnostic trace, matching
/// the contract that absence of a host is a valid state rather than an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedBridge;

impl HostBridge for DisconnectedBridge {
    fn is_available(&self) -> bool {
        false
    }

    fn send(&self, command: HostCommand, payload: Option<Value>) {
        tracing::debug!(%command, ?payload, "no host bridge; command dropped");
    }
}

/// Bridge that forwards commands over an in-process channel.
///
/// The receiving half belongs to whatever hosts the interface; the sender
/// side never learns what happens to a message.
pub struct ChannelBridge {
    tx: mpsc::UnboundedSender<BridgeMessage>,
}

impl ChannelBridge {
    /// Creates the bridge and hands back the host's receiving half.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BridgeMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HostBridge for ChannelBridge {
    fn is_available(&self) -> bool {
        true
    }

    fn send(&self, command: HostCommand, payload: Option<Value>) {
        // A closed receiver still satisfies fire-and-forget; nothing to report.
        if self.tx.send(BridgeMessage { command, payload }).is_err() {
            tracing::debug!(%command, "host channel closed; command dropped");
        }
    }
}

//! Application layer for the GHOST client runtime.
//!
//! Use cases that drive the domain store and simulate the system's
//! collaborators: the boot sequence, the sign-in flow, the chat engine,
//! the tutor catalog, the settings domain, the S.O.S. dispatch and the
//! dashboard/admin read models. Every delay here is a visual simulation
//! knob, injectable so tests run instantly.

pub mod auth;
pub mod boot;
pub mod chat;
pub mod panel;
pub mod settings;
pub mod sos;
pub mod tutor;

pub use auth::{AuthUseCase, IdentityProvider, SimulatedGoogleIdentity};
pub use boot::BootSequence;
pub use chat::ChatService;
pub use panel::{AdminConsole, DashboardStats};
pub use settings::SettingsService;
pub use sos::SosUseCase;

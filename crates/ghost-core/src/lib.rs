//! Core domain layer for the GHOST client runtime.
//!
//! This crate owns the process-wide session state and the policies derived
//! from it: the [`session::SessionStore`] singleton, the [`user`] model, the
//! [`route`] table with its navigation guard, and the one-way [`bridge`] to
//! the native host. Everything here is in-memory for the lifetime of the
//! process; nothing is persisted.

pub mod bridge;
pub mod config;
pub mod error;
pub mod route;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{GhostError, Result};

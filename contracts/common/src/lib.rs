//! Shared helpers for the hospital contracts.
//!
//! This crate provides:
//! - [`CredentialVerifier`]: the comparison a contract delegates to when a
//!   caller unlocks a stored secret.
//! - [`PlaintextVerifier`]: exact, case-sensitive comparison.

#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod credential;

pub use credential::*;

//! # EDL Token Rotator
//!
//! Scheduled rotation of an Earthdata Login bearer token: loads the EDL
//! credentials from the secure parameter store, mints a fresh token
//! (revoking existing tokens when the provider's limit is hit), and
//! overwrites the secure parameter that downstream consumers read.
//!
//! Modules:
//! - `config` — settings file and invocation event types
//! - `creds` — credential loading behind the `CredentialStore` seam
//! - `sources` — the EDL token endpoint client and its response shapes
//! - `sinks` — key resolution and the secure parameter write
//! - `runner` — the per-run orchestration sequence

pub mod config;
pub mod creds;
pub mod error;
pub mod runner;
pub mod sinks;
pub mod sources;
pub mod tests;
pub mod utils;

pub use crate::error::{Result, RotatorError};
pub use crate::sources::response::TokenRequestOutcome;

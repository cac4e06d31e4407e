//! Medscope - hospital network analytics API
//!
//! Serves read-only reports over a directory of JSON datasets:
//! - Positioning against the network baseline and quality scores
//! - Risk profiles, certification and document status
//! - ICU, equipment, maintenance and surgical capacity
//! - City coverage and hospital directory views

// Allow clippy lints that are acceptable for this codebase
#![allow(
    clippy::too_many_arguments, // Derivations take one slice per dataset they join
)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

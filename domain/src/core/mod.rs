//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] - user input rejected before any mutation
//! - [`error::FormatError`] - structurally invalid quote payload

pub mod error;

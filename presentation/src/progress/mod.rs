//! Sync progress reporting

pub mod reporter;

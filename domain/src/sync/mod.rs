//! Remote reconciliation
//!
//! The merge rule applied when a batch of server quotes arrives. See
//! [`reconcile::reconcile`].

pub mod reconcile;

/// Category assigned to every quote mapped from the remote source
pub const SERVER_CATEGORY: &str = "Server";

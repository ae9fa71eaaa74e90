//! Last-write-wins merge of a remote batch into the local collection

use crate::quote::collection::QuoteCollection;
use crate::quote::entities::Quote;

/// Result of merging one remote batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The merged collection
    pub merged: QuoteCollection,
    /// Remote quotes that replaced a local quote in place
    pub conflicts: usize,
    /// Remote quotes appended because no local text matched
    pub inserted: usize,
}

/// Merge `remote` into `local`.
///
/// For each remote quote, in order: if a local quote has exactly the same
/// text, the first such quote is replaced in place by the remote one
/// (category included) and counted as a conflict; otherwise the remote
/// quote is appended. Earlier remote entries are visible to later ones, so
/// a batch containing the same text twice appends once and then conflicts.
///
/// Deterministic for a fixed `local` and remote order. Not commutative
/// across reordered batches.
pub fn reconcile(local: QuoteCollection, remote: &[Quote]) -> ReconcileOutcome {
    let mut merged = local;
    let mut conflicts = 0;
    let mut inserted = 0;

    for quote in remote {
        match merged.position_by_text(quote.text()) {
            Some(index) => {
                merged.replace_at(index, quote.clone());
                conflicts += 1;
            }
            None => {
                merged.push(quote.clone());
                inserted += 1;
            }
        }
    }

    ReconcileOutcome {
        merged,
        conflicts,
        inserted,
    }
}

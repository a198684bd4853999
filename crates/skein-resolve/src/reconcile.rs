//! Reconciliation — resolve sorted palettes against the inventory index.

use serde::{Deserialize, Serialize};

use crate::inventory::{InventoryEntry, InventoryIndex};
use crate::palette::{SortedPalette, THREADS_PER_PALETTE};

/// A fully resolved palette: common fields plus exactly six thread
/// references, each either a matched inventory entry or the placeholder.
/// Downstream consumers never see an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPalette {
    pub date: String,
    pub post_link: String,
    pub photo_link: String,
    pub threads: [InventoryEntry; THREADS_PER_PALETTE],
}

impl ResolvedPalette {
    /// Count of references that fell back to the placeholder.
    pub fn unmatched(&self) -> usize {
        self.threads.iter().filter(|t| t.is_placeholder()).count()
    }
}

/// Resolves palette thread references against an inventory snapshot.
///
/// Pure over its two inputs: no state is retained between calls, and a
/// missing identifier is an expected condition (retired or not-yet-
/// catalogued threads), never an error.
pub struct Reconciler;

impl Reconciler {
    /// Resolve one palette. Each sorted identifier is looked up in the
    /// index; a miss yields `InventoryEntry::placeholder()`.
    pub fn resolve(palette: &SortedPalette, index: &InventoryIndex) -> ResolvedPalette {
        let threads = palette
            .threads
            .clone()
            .map(|id| index.lookup(&id).cloned().unwrap_or_else(InventoryEntry::placeholder));
        ResolvedPalette {
            date: palette.date.clone(),
            post_link: palette.post_link.clone(),
            photo_link: palette.photo_link.clone(),
            threads,
        }
    }

    /// Resolve a whole palette load, preserving order.
    pub fn resolve_all(palettes: &[SortedPalette], index: &InventoryIndex) -> Vec<ResolvedPalette> {
        palettes
            .iter()
            .map(|palette| Self::resolve(palette, index))
            .collect()
    }
}

//! Skein Resolve — the reconciliation core.
//!
//! Raw rows become typed inventory entries and sorted palettes, then each
//! palette's six thread references are resolved against the inventory index
//! to annotate ownership.

pub mod inventory;
pub mod palette;
pub mod reconcile;

pub use inventory::{InventoryEntry, InventoryIndex};
pub use palette::{SortedPalette, THREADS_PER_PALETTE};
pub use reconcile::{Reconciler, ResolvedPalette};

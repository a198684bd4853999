//! Runtime types.

use std::collections::BTreeSet;

use serde::Serialize;

use skein_core::ThreadId;
use skein_resolve::{InventoryEntry, ResolvedPalette};

/// One fully reconciled data load, handed to the rendering layer. Derived
/// fresh from raw input plus the current inventory; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Inventory entries in source row order.
    pub inventory: Vec<InventoryEntry>,
    /// Resolved palettes in source row order, six thread references each.
    pub palettes: Vec<ResolvedPalette>,
    /// Identifiers of owned threads, in display order.
    pub owned_identifiers: BTreeSet<ThreadId>,
}

/// Counters describing a single pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Inventory rows accepted by ingestion.
    pub inventory_rows: usize,
    /// Palette rows accepted by ingestion.
    pub palette_rows: usize,
    /// Thread references that resolved to the placeholder.
    pub unmatched_references: usize,
    pub duration_ms: u64,
}

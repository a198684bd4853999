//! Inventory entries and the lookup index.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use skein_core::ThreadId;
use skein_ingest::RawInventoryRow;

/// One typed inventory entry, created from a single raw row and immutable
/// afterwards. Ownership comes solely from the originating row; palettes
/// never write back into the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub identifier: ThreadId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub owned: bool,
}

impl InventoryEntry {
    /// Build an entry from a raw adapter row, normalizing the identifier
    /// and coercing the ownership marker.
    pub fn from_row(row: &RawInventoryRow) -> Self {
        let name = row
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        Self {
            identifier: ThreadId::normalize(row.number.trim()),
            name,
            owned: row.owned.is_owned(),
        }
    }

    /// Convert a whole inventory load, preserving row order.
    pub fn from_rows(rows: &[RawInventoryRow]) -> Vec<Self> {
        rows.iter().map(Self::from_row).collect()
    }

    /// The sentinel entry standing in for an identifier absent from the
    /// inventory: blank identifier, no name, not owned.
    pub fn placeholder() -> Self {
        Self {
            identifier: ThreadId::Text(String::new()),
            name: None,
            owned: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.identifier.is_blank() && self.name.is_none() && !self.owned
    }
}

/// Lookup over one inventory snapshot, keyed by normalized identifier.
/// Rebuilt in full whenever a new snapshot loads; never updated in place.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    by_id: HashMap<ThreadId, InventoryEntry>,
}

impl InventoryIndex {
    /// Build the index from entries in row order. Two rows normalizing to
    /// the same identifier resolve last-write-wins: the source sheet is
    /// expected to be unique but nothing validates that, so the later row
    /// silently replaces the earlier one in the index.
    pub fn build(entries: &[InventoryEntry]) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_id.insert(entry.identifier.clone(), entry.clone());
        }
        Self { by_id }
    }

    /// Look up an entry by its normalized identifier.
    pub fn lookup(&self, id: &ThreadId) -> Option<&InventoryEntry> {
        self.by_id.get(id)
    }

    /// The derived set of owned identifiers, in display order.
    pub fn owned_identifiers(&self) -> BTreeSet<ThreadId> {
        self.by_id
            .values()
            .filter(|entry| entry.owned)
            .map(|entry| entry.identifier.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

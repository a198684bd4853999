//! Pipeline execution: rows → inventory index → sorted palettes → resolution.

use tracing::{debug, info};

use skein_core::{DataPaths, Result};
use skein_ingest::{RawInventoryRow, RawPaletteRow};
use skein_resolve::{InventoryEntry, InventoryIndex, Reconciler, SortedPalette};

use crate::types::{LoadReport, Snapshot};

/// Runs the full reconciliation pipeline over one pair of data loads.
///
/// Deterministic and stateless: the same raw inputs always produce the
/// same snapshot, and independent loads never share state.
pub struct Pipeline;

impl Pipeline {
    /// Run over already-materialized raw rows.
    pub fn run(
        inventory_rows: &[RawInventoryRow],
        palette_rows: &[RawPaletteRow],
    ) -> (Snapshot, LoadReport) {
        let start = std::time::Instant::now();
        let mut report = LoadReport {
            inventory_rows: inventory_rows.len(),
            palette_rows: palette_rows.len(),
            ..LoadReport::default()
        };

        // Stage 1: typed inventory entries plus the lookup index.
        let inventory = InventoryEntry::from_rows(inventory_rows);
        let index = InventoryIndex::build(&inventory);
        debug!(
            "Built inventory index: {} entries, {} distinct identifiers",
            inventory.len(),
            index.len()
        );

        // Stage 2: normalize and sort palette threads.
        let sorted = SortedPalette::from_rows(palette_rows);

        // Stage 3: resolve each reference against the index.
        let palettes = Reconciler::resolve_all(&sorted, &index);
        report.unmatched_references = palettes.iter().map(|p| p.unmatched()).sum();

        let owned_identifiers = index.owned_identifiers();
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Pipeline complete: inventory={}, palettes={}, unmatched={}, duration={}ms",
            report.inventory_rows,
            report.palette_rows,
            report.unmatched_references,
            report.duration_ms
        );

        (
            Snapshot {
                inventory,
                palettes,
                owned_identifiers,
            },
            report,
        )
    }

    /// Run over raw delimited text (headerless inventory, headered
    /// palettes). Fails only on a structurally unusable palette header.
    pub fn run_text(inventory_text: &str, palettes_text: &str) -> Result<(Snapshot, LoadReport)> {
        let inventory_rows = skein_ingest::parse_inventory(inventory_text);
        let palette_rows = skein_ingest::parse_palettes(palettes_text)?;
        Ok(Self::run(&inventory_rows, &palette_rows))
    }

    /// Read the two data files and run.
    pub fn run_files(paths: &DataPaths) -> Result<(Snapshot, LoadReport)> {
        info!(
            "Loading data files: {} / {}",
            paths.inventory_file.display(),
            paths.palettes_file.display()
        );
        let inventory_rows = skein_ingest::read_inventory_file(&paths.inventory_file)?;
        let palette_rows = skein_ingest::read_palettes_file(&paths.palettes_file)?;
        Ok(Self::run(&inventory_rows, &palette_rows))
    }
}

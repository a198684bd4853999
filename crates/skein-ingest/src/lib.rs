//! Skein Ingest — raw row records and delimited-text ingestion.
//!
//! Adapters (spreadsheet fetch, file upload) hand the core loosely typed
//! rows; this crate gives those rows an explicit parsed shape before the
//! reconciliation core sees them.

pub mod rows;
pub mod tabular;

pub use rows::{OwnedMarker, RawInventoryRow, RawPaletteRow};
pub use tabular::{parse_inventory, parse_palettes, read_inventory_file, read_palettes_file};

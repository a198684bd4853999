//! Delimited-text ingestion for inventory and palette sheets.
//!
//! Accepts comma-delimited text: a header row for palettes, headerless
//! three-column rows (`number,name,ownedMarker`) for inventory. Trailing
//! carriage returns and a final incomplete line are tolerated; malformed
//! trailing rows are skipped, not fatal.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::rows::{OwnedMarker, RawInventoryRow, RawPaletteRow};
use skein_core::{Error, Result};

/// Columns a palette sheet must carry in its header row.
const PALETTE_COLUMNS: [&str; 9] = [
    "date",
    "post_link",
    "photo_link",
    "thread_1",
    "thread_2",
    "thread_3",
    "thread_4",
    "thread_5",
    "thread_6",
];

/// Parse headerless inventory text. Rows with fewer than three columns or
/// with every column empty are skipped.
pub fn parse_inventory(text: &str) -> Vec<RawInventoryRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable inventory row {}: {}", line + 1, e);
                continue;
            }
        };
        if record.iter().all(|field| field.is_empty()) {
            debug!("Skipping empty inventory row {}", line + 1);
            continue;
        }
        if record.len() < 3 {
            warn!(
                "Skipping short inventory row {} ({} columns)",
                line + 1,
                record.len()
            );
            continue;
        }
        let name = match &record[1] {
            "" => None,
            s => Some(s.to_string()),
        };
        rows.push(RawInventoryRow {
            number: record[0].to_string(),
            name,
            owned: OwnedMarker::Mark(record[2].to_string()),
        });
    }
    rows
}

/// Parse palette text with a `date,post_link,photo_link,thread_1..thread_6`
/// header row. A header missing any of those columns is a structural
/// failure and surfaces as `Error::Tabular`; rows that fail to deserialize
/// under a good header (short trailing lines, stray fragments) are skipped.
pub fn parse_palettes(text: &str) -> Result<Vec<RawPaletteRow>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    {
        let headers = reader
            .headers()
            .map_err(|e| Error::Tabular(format!("unreadable palette header: {}", e)))?;
        if let Some(missing) = PALETTE_COLUMNS
            .iter()
            .copied()
            .find(|col| !headers.iter().any(|h| h == *col))
        {
            return Err(Error::Tabular(format!(
                "palette header is missing column `{}`",
                missing
            )));
        }
    }

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RawPaletteRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Skipping malformed palette row {}: {}", line + 1, e),
        }
    }
    Ok(rows)
}

/// Read and parse an inventory file.
pub fn read_inventory_file(path: &Path) -> Result<Vec<RawInventoryRow>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_inventory(&text))
}

/// Read and parse a palettes file.
pub fn read_palettes_file(path: &Path) -> Result<Vec<RawPaletteRow>> {
    let text = std::fs::read_to_string(path)?;
    parse_palettes(&text)
}

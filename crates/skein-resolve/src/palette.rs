//! Palette parsing: normalize the six thread slots and sort them.

use serde::{Deserialize, Serialize};

use skein_core::ThreadId;
use skein_ingest::RawPaletteRow;

/// Every palette references exactly this many threads.
pub const THREADS_PER_PALETTE: usize = 6;

/// A palette with normalized, display-ordered thread identifiers, not yet
/// resolved against the inventory. Common fields pass through as opaque
/// strings; no date or URL validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedPalette {
    pub date: String,
    pub post_link: String,
    pub photo_link: String,
    pub threads: [ThreadId; THREADS_PER_PALETTE],
}

impl SortedPalette {
    /// Normalize and sort a raw palette row. The resulting thread order is
    /// wholly determined by `ThreadId`'s ordering (text identifiers first,
    /// then numeric ascending); authored slot order is discarded.
    pub fn from_row(row: &RawPaletteRow) -> Self {
        let mut threads = row
            .thread_slots()
            .map(|slot| ThreadId::normalize(slot.trim()));
        threads.sort();
        Self {
            date: row.date.clone(),
            post_link: row.post_link.clone(),
            photo_link: row.photo_link.clone(),
            threads,
        }
    }

    /// Parse a whole palette load, preserving row order.
    pub fn from_rows(rows: &[RawPaletteRow]) -> Vec<Self> {
        rows.iter().map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(slots: [&str; 6]) -> RawPaletteRow {
        RawPaletteRow {
            date: "2023-04-01".into(),
            post_link: "https://example.com/post".into(),
            photo_link: "https://example.com/photo.jpg".into(),
            thread_1: slots[0].into(),
            thread_2: slots[1].into(),
            thread_3: slots[2].into(),
            thread_4: slots[3].into(),
            thread_5: slots[4].into(),
            thread_6: slots[5].into(),
        }
    }

    #[test]
    fn test_sort_alpha_group_before_numeric() {
        let palette = SortedPalette::from_row(&raw(["B", "3", "3", "X", "1", "2"]));
        assert_eq!(
            palette.threads,
            [
                ThreadId::Text("B".into()),
                ThreadId::Text("X".into()),
                ThreadId::Numeric(1),
                ThreadId::Numeric(2),
                ThreadId::Numeric(3),
                ThreadId::Numeric(3),
            ]
        );
    }

    #[test]
    fn test_blank_and_duplicate_slots_keep_six_threads() {
        let palette = SortedPalette::from_row(&raw(["310", "", "310", "", "Ecru", ""]));
        assert_eq!(palette.threads.len(), THREADS_PER_PALETTE);
        // Blanks normalize to empty text identifiers and lead the order.
        assert_eq!(
            palette.threads,
            [
                ThreadId::Text(String::new()),
                ThreadId::Text(String::new()),
                ThreadId::Text(String::new()),
                ThreadId::Text("Ecru".into()),
                ThreadId::Numeric(310),
                ThreadId::Numeric(310),
            ]
        );
    }

    #[test]
    fn test_common_fields_pass_through() {
        let palette = SortedPalette::from_row(&raw(["1", "2", "3", "4", "5", "6"]));
        assert_eq!(palette.date, "2023-04-01");
        assert_eq!(palette.post_link, "https://example.com/post");
        assert_eq!(palette.photo_link, "https://example.com/photo.jpg");
    }

    #[test]
    fn test_slots_are_trimmed_before_normalizing() {
        let palette = SortedPalette::from_row(&raw([" 310", "B5200 ", "1", "2", "3", "4"]));
        assert!(palette.threads.contains(&ThreadId::Numeric(310)));
        assert!(palette.threads.contains(&ThreadId::Text("B5200".into())));
    }
}

//! Raw row records as supplied by ingestion adapters.

use serde::Deserialize;

/// The ownership column as adapters supply it: spreadsheet adapters send a
/// boolean, tabular files carry a single-character marker.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OwnedMarker {
    Flag(bool),
    Mark(String),
}

impl OwnedMarker {
    /// Coerce to a boolean: exactly `"X"` means owned, anything else does
    /// not.
    pub fn is_owned(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Mark(s) => s == "X",
        }
    }
}

impl Default for OwnedMarker {
    fn default() -> Self {
        Self::Mark(String::new())
    }
}

/// One raw inventory row: `{number, name?, owned}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInventoryRow {
    pub number: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owned: OwnedMarker,
}

/// One raw palette row: common fields plus exactly six thread slots, in
/// authored order. Slot order carries no meaning once sorted downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPaletteRow {
    pub date: String,
    pub post_link: String,
    pub photo_link: String,
    pub thread_1: String,
    pub thread_2: String,
    pub thread_3: String,
    pub thread_4: String,
    pub thread_5: String,
    pub thread_6: String,
}

impl RawPaletteRow {
    /// The six raw thread slots.
    pub fn thread_slots(&self) -> [&str; 6] {
        [
            &self.thread_1,
            &self.thread_2,
            &self.thread_3,
            &self.thread_4,
            &self.thread_5,
            &self.thread_6,
        ]
    }
}

//! Skein Runtime — runs the reconciliation pipeline end to end.
//!
//! Raw rows in, reconciled snapshot out: build the inventory and its index,
//! parse and sort the palettes, resolve every thread reference.

pub mod pipeline;
pub mod types;

pub use pipeline::Pipeline;
pub use types::{LoadReport, Snapshot};

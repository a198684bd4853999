//! Skein Core — thread identifiers, error types, configuration.

pub mod config;
pub mod error;
pub mod identifier;

pub use config::{DataPaths, SkeinConfig};
pub use error::{Error, Result};
pub use identifier::ThreadId;

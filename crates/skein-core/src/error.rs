//! Error types for Skein.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tabular data error: {0}")]
    Tabular(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

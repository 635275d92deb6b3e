//! Emission errors

use thiserror::Error;

/// Error while writing declarations
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type EmitResult<T> = Result<T, EmitError>;

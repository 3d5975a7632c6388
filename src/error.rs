//! Error types for the pawn tweak core

use crate::tweak::Field;
use thiserror::Error;

/// Main error type for the pawn tweak core
#[derive(Error, Debug)]
pub enum PawnTweakError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Pawn kind not found: {0}")]
    PawnKindNotFound(String),

    #[error("Host rejected {field} for {def_name}: {reason}")]
    Rejected {
        def_name: String,
        field: Field,
        reason: String,
    },

    #[error("No pawns selected")]
    EmptySelection,

    #[error("Field cannot be multiplied: {0}")]
    NotMultipliable(Field),

    #[error("Unable to determine file path")]
    MissingPath,
}

impl From<serde_json::Error> for PawnTweakError {
    fn from(err: serde_json::Error) -> Self {
        PawnTweakError::DeserializationError(err.to_string())
    }
}

/// Result type alias for the pawn tweak core
pub type Result<T> = std::result::Result<T, PawnTweakError>;

//! Chemistry errors.

use aq_core::AqError;
use thiserror::Error;

/// Result type for chemistry operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors that can occur when building substances.
///
/// The calculator itself is total over valid substances and never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// Negative or non-finite molarity/volume at construction.
    #[error("Invalid quantity for {what}: {value} (must be finite and non-negative)")]
    InvalidQuantity { what: &'static str, value: f64 },

    /// Formula string that names no known species.
    #[error("Unknown species: {formula}")]
    UnknownSpecies { formula: String },
}

impl From<ChemError> for AqError {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::InvalidQuantity { what, .. } => AqError::InvalidArg { what },
            ChemError::UnknownSpecies { .. } => AqError::InvalidArg {
                what: "unknown species formula",
            },
        }
    }
}

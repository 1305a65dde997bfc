//! Error types for simulation operations.

use cs_chemistry::ChemistryError;
use thiserror::Error;

/// Errors raised before a simulation produces any samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Unknown chemistry: {name}")]
    UnknownChemistry { name: String },

    #[error("Invalid parameters: {what}")]
    InvalidParameters { what: &'static str },

    #[error("Chemistry error: {message}")]
    Chemistry { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<ChemistryError> for SimError {
    fn from(e: ChemistryError) -> Self {
        match e {
            ChemistryError::UnknownChemistry { name } => SimError::UnknownChemistry { name },
            other => SimError::Chemistry {
                message: other.to_string(),
            },
        }
    }
}

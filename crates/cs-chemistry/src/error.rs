//! Chemistry catalog errors.

use cs_core::CoreError;
use thiserror::Error;

/// Result type for catalog operations.
pub type ChemistryResult<T> = Result<T, ChemistryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemistryError {
    /// Requested name is not a key of the catalog.
    #[error("Unknown chemistry: {name}")]
    UnknownChemistry { name: String },

    /// Two catalog entries share a name.
    #[error("Duplicate chemistry name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid profile '{name}': {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

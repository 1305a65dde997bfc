//! Error types for the cs-app service layer.

use cs_chemistry::ChemistryError;
use cs_project::ProjectError;
use cs_sim::SimError;

/// Unified error for CLI and GUI frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown chemistry: {name}")]
    UnknownChemistry { name: String },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cs-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<SimError> for AppError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::UnknownChemistry { name } => AppError::UnknownChemistry { name },
            SimError::InvalidParameters { what } => AppError::InvalidParameters(what.to_string()),
            SimError::Chemistry { message } => AppError::Catalog(message),
        }
    }
}

impl From<ChemistryError> for AppError {
    fn from(err: ChemistryError) -> Self {
        match err {
            ChemistryError::UnknownChemistry { name } => AppError::UnknownChemistry { name },
            other => AppError::Catalog(other.to_string()),
        }
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::Io(e) => AppError::Io(e),
            other => AppError::Project(other.to_string()),
        }
    }
}

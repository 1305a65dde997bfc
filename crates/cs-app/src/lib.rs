//! Shared application service layer for cellsim.
//!
//! Both the CLI and the GUI go through this crate: it turns control values
//! into simulator requests, runs every dashboard cell in isolation, formats
//! the summary metrics and exports samples.

pub mod cache;
pub mod cell_service;
pub mod error;
pub mod export;
pub mod project_service;
pub mod summary;

// Re-export key types for convenience
pub use cache::SimulationCache;
pub use cell_service::{
    CellOutcome, CellReport, build_request, run_cell, run_cell_cached, run_dashboard,
};
pub use error::{AppError, AppResult};
pub use export::{CSV_HEADER, to_csv, write_csv};
pub use project_service::{catalog_for, load_project, save_project, validate_project};
pub use summary::CellSummary;

pub use cs_project::CellDef;
pub use cs_project::limits;

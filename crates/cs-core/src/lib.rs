//! cs-core: stable foundation for cellsim.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (finite / positive / fraction range checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;

// Downstream crates name units through this re-export
pub use uom;

//! cs-chemistry: battery chemistry profiles for cellsim.
//!
//! Provides:
//! - `ChemistryProfile`: per-cell nominal voltage, capacity and round-trip efficiency
//! - `ChemistryCatalog`: read-only name → profile mapping
//! - Built-in presets (full reference set and the four-entry compact set)
//!
//! # Example
//!
//! ```
//! use cs_chemistry::reference_catalog;
//!
//! let catalog = reference_catalog();
//! let lfp = catalog.lookup("LFP").unwrap();
//! assert_eq!(lfp.nominal_voltage_v(), 3.2);
//! ```

pub mod catalog;
pub mod error;
pub mod profile;

pub use catalog::{CatalogPreset, ChemistryCatalog, compact_catalog, reference_catalog};
pub use error::{ChemistryError, ChemistryResult};
pub use profile::ChemistryProfile;

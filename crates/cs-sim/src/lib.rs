//! Linear-ramp charge/discharge simulation for battery packs.
//!
//! Provides:
//! - Pack topology (series/parallel counts) and derived pack ratings
//! - Per-run request and fixed 1 s sample records
//! - `simulate`, a pure closed-form time-series generator

pub mod error;
pub mod mode;
pub mod pack;
pub mod record;
pub mod request;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use mode::{Mode, ParseModeError};
pub use pack::PackConfiguration;
pub use record::{Sample, SimulationResult};
pub use request::SimulationRequest;
pub use sim::simulate;

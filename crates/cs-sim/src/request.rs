use crate::error::{SimError, SimResult};
use crate::mode::Mode;
use crate::pack::PackConfiguration;
use cs_chemistry::{ChemistryCatalog, ChemistryProfile};
use serde::{Deserialize, Serialize};

/// Parameters of one run. Built fresh for every render or trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub chemistry: ChemistryProfile,
    pub pack: PackConfiguration,
    pub mode: Mode,
    pub duration_s: u32,
}

impl SimulationRequest {
    pub fn new(
        chemistry: ChemistryProfile,
        pack: PackConfiguration,
        mode: Mode,
        duration_s: u32,
    ) -> SimResult<Self> {
        let request = Self {
            chemistry,
            pack,
            mode,
            duration_s,
        };
        request.validate()?;
        Ok(request)
    }

    /// Resolve `chemistry_name` against `catalog` and build a validated request.
    pub fn from_catalog(
        catalog: &ChemistryCatalog,
        chemistry_name: &str,
        pack: PackConfiguration,
        mode: Mode,
        duration_s: u32,
    ) -> SimResult<Self> {
        let chemistry = catalog.lookup(chemistry_name)?.clone();
        Self::new(chemistry, pack, mode, duration_s)
    }

    /// Also re-checks the chemistry profile.
    pub fn validate(&self) -> SimResult<()> {
        self.chemistry.validate()?;
        if self.duration_s == 0 {
            return Err(SimError::InvalidParameters {
                what: "duration_s must be at least 1",
            });
        }
        self.pack.validate()
    }
}

//! Series/parallel pack topology.

use crate::error::{SimError, SimResult};
use cs_chemistry::ChemistryProfile;
use serde::{Deserialize, Serialize};

/// How identical cells are wired into a pack.
///
/// Series count multiplies voltage, parallel count multiplies capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackConfiguration {
    pub series_count: u32,
    pub parallel_count: u32,
}

impl PackConfiguration {
    pub fn new(series_count: u32, parallel_count: u32) -> SimResult<Self> {
        let pack = Self {
            series_count,
            parallel_count,
        };
        pack.validate()?;
        Ok(pack)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.series_count == 0 {
            return Err(SimError::InvalidParameters {
                what: "series_count must be at least 1",
            });
        }
        if self.parallel_count == 0 {
            return Err(SimError::InvalidParameters {
                what: "parallel_count must be at least 1",
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.series_count) * u64::from(self.parallel_count)
    }

    pub fn pack_voltage_v(&self, chemistry: &ChemistryProfile) -> f64 {
        chemistry.nominal_voltage_v() * f64::from(self.series_count)
    }

    pub fn pack_capacity_ah(&self, chemistry: &ChemistryProfile) -> f64 {
        chemistry.nominal_capacity_ah() * f64::from(self.parallel_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_counts_rejected() {
        assert!(matches!(
            PackConfiguration::new(0, 2),
            Err(SimError::InvalidParameters { .. })
        ));
        assert!(matches!(
            PackConfiguration::new(3, 0),
            Err(SimError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn derived_ratings() {
        let chem = ChemistryProfile::new("Lithium-Ion", 3.7, 2.5, 0.95).unwrap();
        let pack = PackConfiguration::new(3, 2).unwrap();
        assert!(approx(pack.pack_voltage_v(&chem), 11.1));
        assert!(approx(pack.pack_capacity_ah(&chem), 5.0));
        assert_eq!(pack.cell_count(), 6);
    }

    #[test]
    fn no_upper_bound() {
        let pack = PackConfiguration::new(200, 64).unwrap();
        assert_eq!(pack.cell_count(), 12_800);
    }
}

//! Per-cell chemistry description.

use crate::error::{ChemistryError, ChemistryResult};
use cs_core::units::{Charge, Ratio, Voltage, amp_hours, unitless, volts, watt_hours};
use cs_core::{ensure_fraction, ensure_positive};
use serde::{Deserialize, Serialize};

/// Nominal characteristics of a single cell of one chemistry.
///
/// Efficiency is carried as metadata and shown on the dashboard; the
/// simulator never applies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryProfile {
    name: String,
    nominal_voltage_v: f64,
    nominal_capacity_ah: f64,
    efficiency: f64,
}

impl ChemistryProfile {
    pub fn new(
        name: impl Into<String>,
        nominal_voltage_v: f64,
        nominal_capacity_ah: f64,
        efficiency: f64,
    ) -> ChemistryResult<Self> {
        let profile = Self {
            name: name.into(),
            nominal_voltage_v,
            nominal_capacity_ah,
            efficiency,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Entries of the built-in tables, which are known to be in range.
    pub(crate) fn built_in(
        name: &str,
        nominal_voltage_v: f64,
        nominal_capacity_ah: f64,
        efficiency: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            nominal_voltage_v,
            nominal_capacity_ah,
            efficiency,
        }
    }

    /// Re-check the value ranges. Needed for profiles that came in through serde.
    pub fn validate(&self) -> ChemistryResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChemistryError::InvalidArg {
                what: "chemistry name must not be empty",
            });
        }
        let wrap = |source| ChemistryError::InvalidProfile {
            name: self.name.clone(),
            source,
        };
        ensure_positive(self.nominal_voltage_v, "nominal_voltage_v").map_err(wrap)?;
        ensure_positive(self.nominal_capacity_ah, "nominal_capacity_ah").map_err(wrap)?;
        ensure_fraction(self.efficiency, "efficiency").map_err(wrap)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Volts per cell.
    pub fn nominal_voltage_v(&self) -> f64 {
        self.nominal_voltage_v
    }

    /// Amp-hours per cell.
    pub fn nominal_capacity_ah(&self) -> f64 {
        self.nominal_capacity_ah
    }

    /// Round-trip efficiency fraction in (0, 1].
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn nominal_voltage(&self) -> Voltage {
        volts(self.nominal_voltage_v)
    }

    pub fn nominal_capacity(&self) -> Charge {
        amp_hours(self.nominal_capacity_ah)
    }

    pub fn efficiency_ratio(&self) -> Ratio {
        unitless(self.efficiency)
    }

    pub fn nominal_energy_wh(&self) -> f64 {
        watt_hours(self.nominal_voltage(), self.nominal_capacity())
    }
}

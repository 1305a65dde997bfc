//! Simulation output records.

use crate::mode::Mode;
use cs_chemistry::ChemistryProfile;
use cs_core::units::{Charge, Current, Voltage, amp_hours, amps, volts};
use serde::{Deserialize, Serialize};

/// Instantaneous pack state at one integer second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time_s: u32,
    /// State of charge in percent, always within [0, 100].
    pub soc_percent: f64,
    /// Pack-level voltage.
    pub voltage_v: f64,
    /// Positive while charging, negative while discharging.
    pub current_a: f64,
}

impl Sample {
    pub fn current(&self) -> Current {
        amps(self.current_a)
    }
}

/// Full output of one run, owned by the caller that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub chemistry: ChemistryProfile,
    pub mode: Mode,
    /// One sample per second, `samples[i].time_s == i`.
    pub samples: Vec<Sample>,
    pub pack_voltage_v: f64,
    pub pack_capacity_ah: f64,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn pack_voltage(&self) -> Voltage {
        volts(self.pack_voltage_v)
    }

    pub fn pack_capacity(&self) -> Charge {
        amp_hours(self.pack_capacity_ah)
    }

    pub fn times(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.time_s).collect()
    }

    pub fn soc_series(&self) -> Vec<[f64; 2]> {
        self.series(|s| s.soc_percent)
    }

    pub fn voltage_series(&self) -> Vec<[f64; 2]> {
        self.series(|s| s.voltage_v)
    }

    pub fn current_series(&self) -> Vec<[f64; 2]> {
        self.series(|s| s.current_a)
    }

    fn series(&self, value: impl Fn(&Sample) -> f64) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [f64::from(s.time_s), value(s)])
            .collect()
    }
}

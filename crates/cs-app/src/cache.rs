//! Optional memoization of simulation results.

use crate::error::AppResult;
use cs_sim::{Mode, SimulationRequest, SimulationResult, simulate};
use std::collections::HashMap;

/// Request fingerprint. Chemistry values are compared by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RequestKey {
    chemistry: String,
    voltage_bits: u64,
    capacity_bits: u64,
    efficiency_bits: u64,
    series: u32,
    parallel: u32,
    mode: Mode,
    duration_s: u32,
}

impl From<&SimulationRequest> for RequestKey {
    fn from(req: &SimulationRequest) -> Self {
        Self {
            chemistry: req.chemistry.name().to_string(),
            voltage_bits: req.chemistry.nominal_voltage_v().to_bits(),
            capacity_bits: req.chemistry.nominal_capacity_ah().to_bits(),
            efficiency_bits: req.chemistry.efficiency().to_bits(),
            series: req.pack.series_count,
            parallel: req.pack.parallel_count,
            mode: req.mode,
            duration_s: req.duration_s,
        }
    }
}

/// Caller-owned cache of results keyed on the full request.
#[derive(Debug, Default)]
pub struct SimulationCache {
    entries: HashMap<RequestKey, SimulationResult>,
    hits: u64,
    misses: u64,
}

impl SimulationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_run(&mut self, request: &SimulationRequest) -> AppResult<&SimulationResult> {
        let key = RequestKey::from(request);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            let result = simulate(request)?;
            self.misses += 1;
            self.entries.insert(key.clone(), result);
        }
        Ok(&self.entries[&key])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

//! Dashboard metric strings.

use cs_core::uom::si::electric_charge::ampere_hour;
use cs_core::uom::si::electric_current::ampere;
use cs_core::uom::si::electric_potential::volt;
use cs_core::uom::si::ratio::percent;
use cs_sim::SimulationResult;

/// The five values shown above the plots of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSummary {
    pub chemistry: String,
    pub pack_voltage: String,
    pub pack_capacity: String,
    pub efficiency: String,
    pub current: String,
}

impl CellSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            chemistry: result.chemistry.name().to_string(),
            pack_voltage: format!("{:.2} V", result.pack_voltage().get::<volt>()),
            pack_capacity: format!("{:.2} Ah", result.pack_capacity().get::<ampere_hour>()),
            efficiency: format!(
                "{:.0}%",
                result.chemistry.efficiency_ratio().get::<percent>()
            ),
            current: format!(
                "{:.2} A",
                result.first().map_or(0.0, |s| s.current().get::<ampere>())
            ),
        }
    }

    /// (label, value) pairs in display order.
    pub fn metrics(&self) -> [(&'static str, &str); 5] {
        [
            ("Type", self.chemistry.as_str()),
            ("Voltage", self.pack_voltage.as_str()),
            ("Capacity", self.pack_capacity.as_str()),
            ("Efficiency", self.efficiency.as_str()),
            ("Current", self.current.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_chemistry::reference_catalog;
    use cs_sim::{Mode, PackConfiguration, SimulationRequest, simulate};

    fn summary(
        name: &str,
        series: u32,
        parallel: u32,
        mode: Mode,
        duration_s: u32,
    ) -> CellSummary {
        let req = SimulationRequest::from_catalog(
            &reference_catalog(),
            name,
            PackConfiguration::new(series, parallel).unwrap(),
            mode,
            duration_s,
        )
        .unwrap();
        CellSummary::from_result(&simulate(&req).unwrap())
    }

    #[test]
    fn lithium_ion_3s2p() {
        let s = summary("Lithium-Ion", 3, 2, Mode::Charging, 10);
        assert_eq!(s.chemistry, "Lithium-Ion");
        assert_eq!(s.pack_voltage, "11.10 V");
        assert_eq!(s.pack_capacity, "5.00 Ah");
        assert_eq!(s.efficiency, "95%");
        assert_eq!(s.current, "0.50 A");
    }

    #[test]
    fn discharging_current_is_negative() {
        let s = summary("Lead-Acid", 6, 1, Mode::Discharging, 50);
        assert_eq!(s.pack_voltage, "12.00 V");
        assert_eq!(s.efficiency, "85%");
        assert_eq!(s.current, "-0.10 A");
    }

    #[test]
    fn metrics_order() {
        let s = summary("NiMH", 1, 1, Mode::Charging, 10);
        let labels: Vec<&str> = s.metrics().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Type", "Voltage", "Capacity", "Efficiency", "Current"]);
        assert_eq!(s.metrics()[3].1, "75%");
    }
}

//! Linear ramp simulation.

use crate::error::SimResult;
use crate::mode::Mode;
use crate::record::{Sample, SimulationResult};
use crate::request::SimulationRequest;
use tracing::debug;

/// Produce one sample per second of SOC, pack voltage and current.
///
/// Each step first moves SOC by `100 / duration_s` toward the target end
/// (clamped to [0, 100]) and then records it, so the sample at `t = 0`
/// already carries one increment. Current is the constant
/// `pack_capacity / duration_s` with the sign of the mode and is not derived
/// from the SOC change. Voltage scales pack voltage by SOC.
///
/// Fails only on invalid requests, before any sample exists.
pub fn simulate(request: &SimulationRequest) -> SimResult<SimulationResult> {
    request.validate()?;

    let pack_voltage_v = request.pack.pack_voltage_v(&request.chemistry);
    let pack_capacity_ah = request.pack.pack_capacity_ah(&request.chemistry);
    let duration = f64::from(request.duration_s);
    let sign = request.mode.sign();

    let mut samples = Vec::with_capacity(request.duration_s as usize);
    let mut soc = request.mode.initial_soc();

    for t in 0..request.duration_s {
        let ramp = 100.0 / duration;
        soc = match request.mode {
            Mode::Charging => (soc + ramp).min(100.0),
            Mode::Discharging => (soc - ramp).max(0.0),
        };

        let current_a = (pack_capacity_ah / duration) * sign;
        let voltage_v = pack_voltage_v * (soc / 100.0);

        samples.push(Sample {
            time_s: t,
            soc_percent: soc,
            voltage_v,
            current_a,
        });
    }

    debug!(
        chemistry = request.chemistry.name(),
        series = request.pack.series_count,
        parallel = request.pack.parallel_count,
        cells = request.pack.cell_count(),
        mode = %request.mode,
        duration_s = request.duration_s,
        pack_voltage_v,
        pack_capacity_ah,
        "simulation complete"
    );

    Ok(SimulationResult {
        chemistry: request.chemistry.clone(),
        mode: request.mode,
        samples,
        pack_voltage_v,
        pack_capacity_ah,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackConfiguration, SimError};
    use cs_chemistry::{ChemistryProfile, reference_catalog};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn request(
        name: &str,
        series: u32,
        parallel: u32,
        mode: Mode,
        duration_s: u32,
    ) -> SimulationRequest {
        SimulationRequest::from_catalog(
            &reference_catalog(),
            name,
            PackConfiguration::new(series, parallel).unwrap(),
            mode,
            duration_s,
        )
        .unwrap()
    }

    #[test]
    fn lithium_ion_3s2p_charging_ten_seconds() {
        let result = simulate(&request("Lithium-Ion", 3, 2, Mode::Charging, 10)).unwrap();

        assert!(approx(result.pack_voltage_v, 11.1));
        assert!(approx(result.pack_capacity_ah, 5.0));
        assert_eq!(result.len(), 10);

        let first = result.samples[0];
        assert_eq!(first.time_s, 0);
        assert!(approx(first.soc_percent, 10.0));
        assert!(approx(first.current_a, 0.5));
        assert!(approx(first.voltage_v, 1.11));

        let last = result.samples[9];
        assert_eq!(last.time_s, 9);
        assert!(approx(last.soc_percent, 100.0));
        assert!(approx(last.current_a, 0.5));
        assert!(approx(last.voltage_v, 11.1));
    }

    #[test]
    fn discharging_ramps_down_to_zero() {
        let result = simulate(&request("LFP", 4, 1, Mode::Discharging, 20)).unwrap();

        assert!(approx(result.samples[0].soc_percent, 95.0));
        assert!(approx(result.samples[19].soc_percent, 0.0));
        assert!(approx(result.samples[0].current_a, -0.15));
        assert!(approx(result.samples[19].voltage_v, 0.0));
    }

    #[test]
    fn single_second_jumps_to_the_end() {
        let charge = simulate(&request("NiMH", 1, 1, Mode::Charging, 1)).unwrap();
        assert_eq!(charge.len(), 1);
        assert_eq!(charge.samples[0].soc_percent, 100.0);
        assert_eq!(charge.samples[0].current_a, 2.0);

        let discharge = simulate(&request("NiMH", 1, 1, Mode::Discharging, 1)).unwrap();
        assert_eq!(discharge.len(), 1);
        assert_eq!(discharge.samples[0].soc_percent, 0.0);
        assert_eq!(discharge.samples[0].voltage_v, 0.0);
    }

    #[test]
    fn zero_duration_is_rejected_without_samples() {
        let mut req = request("NMC", 2, 2, Mode::Charging, 10);
        req.duration_s = 0;
        assert!(matches!(
            simulate(&req),
            Err(SimError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn zero_counts_are_rejected() {
        let mut req = request("NMC", 2, 2, Mode::Charging, 10);
        req.pack.series_count = 0;
        assert!(matches!(
            simulate(&req),
            Err(SimError::InvalidParameters { .. })
        ));

        let mut req = request("NMC", 2, 2, Mode::Charging, 10);
        req.pack.parallel_count = 0;
        assert!(simulate(&req).is_err());
    }

    #[test]
    fn efficiency_does_not_change_the_output() {
        let a = ChemistryProfile::new("A", 3.7, 2.5, 0.5).unwrap();
        let b = ChemistryProfile::new("A", 3.7, 2.5, 1.0).unwrap();
        let pack = PackConfiguration::new(2, 2).unwrap();
        let ra = simulate(&SimulationRequest::new(a, pack, Mode::Charging, 40).unwrap()).unwrap();
        let rb = simulate(&SimulationRequest::new(b, pack, Mode::Charging, 40).unwrap()).unwrap();
        assert_eq!(ra.samples, rb.samples);
    }

    #[test]
    fn unit_accessors_match_raw_fields() {
        use cs_core::uom::si::electric_charge::ampere_hour;
        use cs_core::uom::si::electric_current::ampere;
        use cs_core::uom::si::electric_potential::volt;

        let result = simulate(&request("Lead-Acid", 6, 2, Mode::Discharging, 50)).unwrap();
        assert!(approx(result.pack_voltage().get::<volt>(), 12.0));
        assert!(approx(result.pack_capacity().get::<ampere_hour>(), 10.0));
        for sample in &result.samples {
            assert!(approx(sample.current().get::<ampere>(), sample.current_a));
        }
    }

    #[test]
    fn plot_series_share_time_axis() {
        let result = simulate(&request("LCO", 2, 3, Mode::Charging, 25)).unwrap();
        let soc = result.soc_series();
        let voltage = result.voltage_series();
        let current = result.current_series();
        assert_eq!(soc.len(), 25);
        assert_eq!(result.times(), (0..25).collect::<Vec<u32>>());
        for i in 0..25 {
            assert_eq!(soc[i][0], i as f64);
            assert_eq!(voltage[i][0], soc[i][0]);
            assert_eq!(current[i][0], soc[i][0]);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::PackConfiguration;
    use cs_chemistry::reference_catalog;
    use proptest::prelude::*;

    fn arb_request() -> impl Strategy<Value = SimulationRequest> {
        (0usize..8, 1u32..=10, 1u32..=5, any::<bool>(), 1u32..=400).prop_map(
            |(chem, series, parallel, charging, duration_s)| {
                let catalog = reference_catalog();
                let chemistry = catalog.iter().nth(chem).cloned().unwrap();
                let mode = if charging {
                    Mode::Charging
                } else {
                    Mode::Discharging
                };
                SimulationRequest::new(
                    chemistry,
                    PackConfiguration::new(series, parallel).unwrap(),
                    mode,
                    duration_s,
                )
                .unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn one_sample_per_second(req in arb_request()) {
            let result = simulate(&req).unwrap();
            prop_assert_eq!(result.len(), req.duration_s as usize);
            for (i, s) in result.samples.iter().enumerate() {
                prop_assert_eq!(s.time_s as usize, i);
            }
        }

        #[test]
        fn soc_is_bounded_and_monotone(req in arb_request()) {
            let result = simulate(&req).unwrap();
            for s in &result.samples {
                prop_assert!((0.0..=100.0).contains(&s.soc_percent));
                prop_assert!(s.voltage_v >= 0.0);
            }
            for w in result.samples.windows(2) {
                match req.mode {
                    Mode::Charging => prop_assert!(w[1].soc_percent >= w[0].soc_percent),
                    Mode::Discharging => prop_assert!(w[1].soc_percent <= w[0].soc_percent),
                }
            }
        }

        #[test]
        fn current_is_constant(req in arb_request()) {
            let result = simulate(&req).unwrap();
            let expected = (req.chemistry.nominal_capacity_ah() * f64::from(req.pack.parallel_count)
                / f64::from(req.duration_s))
                * req.mode.sign();
            for s in &result.samples {
                prop_assert_eq!(s.current_a, expected);
            }
        }

        #[test]
        fn voltage_follows_soc(req in arb_request()) {
            let result = simulate(&req).unwrap();
            for s in &result.samples {
                prop_assert_eq!(s.voltage_v, result.pack_voltage_v * (s.soc_percent / 100.0));
            }
        }

        #[test]
        fn deterministic(req in arb_request()) {
            prop_assert_eq!(simulate(&req).unwrap(), simulate(&req).unwrap());
        }
    }
}

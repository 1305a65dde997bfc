//! CSV export of a result's samples.

use cs_sim::SimulationResult;
use std::io::Write;

pub const CSV_HEADER: &str = "time_s,soc_percent,voltage_v,current_a";

pub fn to_csv(result: &SimulationResult) -> String {
    let mut csv = String::with_capacity(32 * (result.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for s in &result.samples {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            s.time_s, s.soc_percent, s.voltage_v, s.current_a
        ));
    }
    csv
}

pub fn write_csv(result: &SimulationResult, mut writer: impl Write) -> std::io::Result<()> {
    writer.write_all(to_csv(result).as_bytes())?;
    writer.flush()
}

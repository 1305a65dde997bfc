//! Control values → request → result, one cell at a time.

use crate::cache::SimulationCache;
use crate::error::AppResult;
use crate::summary::CellSummary;
use cs_chemistry::ChemistryCatalog;
use cs_project::CellDef;
use cs_sim::{PackConfiguration, SimulationRequest, SimulationResult, simulate};
use tracing::warn;

/// Result of one dashboard cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    pub label: String,
    pub result: SimulationResult,
    pub summary: CellSummary,
    /// Echoed from the controls for display only.
    pub speed_multiplier: u32,
}

impl CellReport {
    fn new(cell: &CellDef, result: SimulationResult) -> Self {
        Self {
            label: cell.label.clone(),
            summary: CellSummary::from_result(&result),
            result,
            speed_multiplier: cell.speed_multiplier,
        }
    }
}

/// Outcome of one cell inside a dashboard pass.
#[derive(Debug)]
pub struct CellOutcome {
    pub label: String,
    pub report: AppResult<CellReport>,
}

/// Build the simulator request for a cell. Values are used as given.
pub fn build_request(catalog: &ChemistryCatalog, cell: &CellDef) -> AppResult<SimulationRequest> {
    let pack = PackConfiguration::new(cell.series, cell.parallel)?;
    Ok(SimulationRequest::from_catalog(
        catalog,
        &cell.chemistry,
        pack,
        cell.mode,
        cell.duration_s,
    )?)
}

pub fn run_cell(catalog: &ChemistryCatalog, cell: &CellDef) -> AppResult<CellReport> {
    let request = build_request(catalog, cell)?;
    let result = simulate(&request)?;
    Ok(CellReport::new(cell, result))
}

/// Same as [`run_cell`] but reuses a previous result for identical requests.
pub fn run_cell_cached(
    cache: &mut SimulationCache,
    catalog: &ChemistryCatalog,
    cell: &CellDef,
) -> AppResult<CellReport> {
    let request = build_request(catalog, cell)?;
    let result = cache.get_or_run(&request)?.clone();
    Ok(CellReport::new(cell, result))
}

/// Run every cell independently; a failing cell does not stop the others.
pub fn run_dashboard(catalog: &ChemistryCatalog, cells: &[CellDef]) -> Vec<CellOutcome> {
    cells
        .iter()
        .map(|cell| {
            let report = run_cell(catalog, cell);
            if let Err(e) = &report {
                warn!(cell = %cell.label, error = %e, "cell simulation failed");
            }
            CellOutcome {
                label: cell.label.clone(),
                report,
            }
        })
        .collect()
}

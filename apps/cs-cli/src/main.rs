use clap::{Parser, Subcommand};
use cs_app::{AppError, AppResult, CellDef, CellReport, project_service, run_cell, run_dashboard};
use cs_chemistry::{CatalogPreset, ChemistryCatalog};
use cs_project::Project;
use cs_sim::Mode;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(about = "CellSim CLI - linear battery charge/discharge simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chemistry catalog
    Chemistries {
        /// Use the four-entry compact catalog
        #[arg(long)]
        compact: bool,
    },
    /// Simulate a single pack
    Simulate {
        /// Chemistry name (catalog key)
        #[arg(long, default_value = "Lithium-Ion")]
        chemistry: String,
        /// Cells in series
        #[arg(long, default_value_t = 3)]
        series: u32,
        /// Cells in parallel
        #[arg(long, default_value_t = 2)]
        parallel: u32,
        /// Charging or Discharging
        #[arg(long, default_value = "Charging")]
        mode: Mode,
        /// Duration in seconds
        #[arg(long, default_value_t = 60)]
        duration: u32,
        /// Use the four-entry compact catalog
        #[arg(long)]
        compact: bool,
        /// Write samples as CSV to a file, or "-" for stdout
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print every N-th sample in the table
        #[arg(long, default_value_t = 1)]
        every: usize,
    },
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Run every cell of a project
    Dashboard {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Write a default project file
    Init {
        /// Output path (.yaml or .json)
        project_path: PathBuf,
        /// Single-cell sidebar layout over the compact catalog
        #[arg(long)]
        sidebar: bool,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chemistries { compact } => cmd_chemistries(&preset(compact).build()),
        Commands::Simulate {
            chemistry,
            series,
            parallel,
            mode,
            duration,
            compact,
            csv,
            every,
        } => {
            let cell = CellDef {
                label: "cli".to_string(),
                chemistry,
                series,
                parallel,
                mode,
                duration_s: duration,
                ..CellDef::default()
            };
            cmd_simulate(&preset(compact).build(), &cell, csv.as_deref(), every)
        }
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Dashboard { project_path } => cmd_dashboard(&project_path),
        Commands::Init {
            project_path,
            sidebar,
        } => cmd_init(&project_path, sidebar),
    }
}

fn preset(compact: bool) -> CatalogPreset {
    if compact {
        CatalogPreset::Compact
    } else {
        CatalogPreset::Reference
    }
}

fn cmd_chemistries(catalog: &ChemistryCatalog) -> AppResult<()> {
    println!(
        "{:<14} {:>9} {:>10} {:>10} {:>11}",
        "Chemistry", "Cell V", "Cell Ah", "Cell Wh", "Efficiency"
    );
    for chem in catalog.iter() {
        println!(
            "{:<14} {:>9.2} {:>10.2} {:>10.2} {:>10.0}%",
            chem.name(),
            chem.nominal_voltage_v(),
            chem.nominal_capacity_ah(),
            chem.nominal_energy_wh(),
            chem.efficiency() * 100.0
        );
    }
    Ok(())
}

fn cmd_simulate(
    catalog: &ChemistryCatalog,
    cell: &CellDef,
    csv: Option<&Path>,
    every: usize,
) -> AppResult<()> {
    if every == 0 {
        return Err(AppError::InvalidInput("--every must be at least 1".into()));
    }

    let report = run_cell(catalog, cell)?;

    match csv {
        Some(path) if path == Path::new("-") => {
            cs_app::write_csv(&report.result, io::stdout().lock())?;
        }
        Some(path) => {
            cs_app::write_csv(&report.result, std::fs::File::create(path)?)?;
            print_summary(&report);
            println!(
                "✓ Exported {} samples to {}",
                report.result.len(),
                path.display()
            );
        }
        None => {
            print_summary(&report);
            print_samples(&report, every);
        }
    }
    Ok(())
}

fn print_summary(report: &CellReport) {
    println!("{} ({}):", report.label, report.result.mode);
    for (label, value) in report.summary.metrics() {
        println!("  {:<11} {}", label, value);
    }
}

fn print_samples(report: &CellReport, every: usize) {
    println!("\n{:>6} {:>9} {:>11} {:>11}", "t (s)", "SOC (%)", "Voltage (V)", "Current (A)");
    for sample in report.result.samples.iter().step_by(every) {
        println!(
            "{:>6} {:>9.2} {:>11.3} {:>11.3}",
            sample.time_s, sample.soc_percent, sample.voltage_v, sample.current_a
        );
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    println!(
        "✓ Project is valid ({} cell(s), {:?} layout)",
        project.cells.len(),
        project.layout
    );
    Ok(())
}

fn cmd_dashboard(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let catalog = project_service::catalog_for(&project)?;
    println!("{}", project.name);

    let outcomes = run_dashboard(&catalog, &project.cells);
    let failed = outcomes.iter().filter(|o| o.report.is_err()).count();
    for outcome in &outcomes {
        println!();
        match &outcome.report {
            Ok(report) => print_summary(report),
            Err(e) => println!("{}: ✗ {}", outcome.label, e),
        }
    }

    if failed > 0 {
        println!("\n{} of {} cell(s) failed", failed, outcomes.len());
    }
    Ok(())
}

fn cmd_init(project_path: &Path, sidebar: bool) -> AppResult<()> {
    let project = if sidebar {
        Project::sidebar_default()
    } else {
        Project::tabbed_default()
    };
    project_service::save_project(project_path, &project)?;
    println!("✓ Wrote {}", project_path.display());
    Ok(())
}

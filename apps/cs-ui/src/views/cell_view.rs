use crate::views::PlotView;
use cs_app::limits::{DURATION_RANGE_S, PARALLEL_RANGE, SERIES_RANGE, SPEED_MULTIPLIER_RANGE};
use cs_app::{AppResult, CellDef, CellReport};
use cs_chemistry::ChemistryCatalog;
use cs_sim::Mode;

/// Controls and dashboard of one cell. Holds no simulation state of its own.
#[derive(Default)]
pub struct CellView {
    plot_view: PlotView,
}

impl CellView {
    /// Two-column configuration block used by the tabbed layout.
    pub fn show_config_columns(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        cell: &mut CellDef,
        catalog: &ChemistryCatalog,
    ) {
        ui.heading(format!("⚙️ Configuration for {}", cell.label));
        ui.columns(2, |cols| {
            chemistry_combo(&mut cols[0], index, cell, catalog);
            pack_sliders(&mut cols[0], cell);
            mode_radio(&mut cols[1], cell);
            duration_slider(&mut cols[1], cell);
        });
    }

    /// Stacked configuration block used by the sidebar layout.
    pub fn show_config_sidebar(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        cell: &mut CellDef,
        catalog: &ChemistryCatalog,
    ) {
        ui.heading("⚙️ Battery Configuration");
        ui.add_space(4.0);
        chemistry_combo(ui, index, cell, catalog);
        pack_sliders(ui, cell);
        ui.separator();
        mode_radio(ui, cell);
        duration_slider(ui, cell);
        // Stored with the cell, not used by the simulation
        ui.add(
            egui::Slider::new(&mut cell.speed_multiplier, SPEED_MULTIPLIER_RANGE)
                .text("Simulation speed"),
        );
    }

    pub fn show_report(&self, ui: &mut egui::Ui, index: usize, outcome: &AppResult<CellReport>) {
        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Simulation failed: {}", e));
                return;
            }
        };

        ui.add_space(6.0);
        ui.heading("📊 Cell Dashboard");
        ui.columns(5, |cols| {
            for (col, (label, value)) in cols.iter_mut().zip(report.summary.metrics()) {
                col.label(label);
                col.label(egui::RichText::new(value).size(20.0).strong());
            }
        });

        ui.add_space(6.0);
        ui.heading("📈 Battery Graphs");
        self.plot_view.show(ui, index, &report.result);
    }
}

fn chemistry_combo(ui: &mut egui::Ui, index: usize, cell: &mut CellDef, catalog: &ChemistryCatalog) {
    ui.label("🔋 Battery Type");
    egui::ComboBox::from_id_salt(("chemistry", index))
        .selected_text(cell.chemistry.as_str())
        .show_ui(ui, |ui| {
            for name in catalog.names() {
                ui.selectable_value(&mut cell.chemistry, name.to_string(), name);
            }
        });
}

fn pack_sliders(ui: &mut egui::Ui, cell: &mut CellDef) {
    ui.add(egui::Slider::new(&mut cell.series, SERIES_RANGE).text("🔗 Cells in Series"));
    ui.add(egui::Slider::new(&mut cell.parallel, PARALLEL_RANGE).text("🧩 Cells in Parallel"));
}

fn mode_radio(ui: &mut egui::Ui, cell: &mut CellDef) {
    ui.label("⚡ Simulation Mode");
    ui.horizontal(|ui| {
        for mode in Mode::ALL {
            ui.radio_value(&mut cell.mode, mode, mode.label());
        }
    });
}

fn duration_slider(ui: &mut egui::Ui, cell: &mut CellDef) {
    ui.add(
        egui::Slider::new(&mut cell.duration_s, DURATION_RANGE_S)
            .text("⏱️ Simulation Duration (s)"),
    );
}

use cs_sim::SimulationResult;
use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints};

const PLOT_HEIGHT: f32 = 170.0;

/// Three stacked plots over the same time range.
#[derive(Default)]
pub struct PlotView;

struct Trace {
    id: &'static str,
    y_label: &'static str,
    color: Color32,
    points: Vec<[f64; 2]>,
}

impl PlotView {
    pub fn show(&self, ui: &mut egui::Ui, cell_index: usize, result: &SimulationResult) {
        let t_end = result.last().map(|s| f64::from(s.time_s)).unwrap_or(0.0);

        let traces = [
            Trace {
                id: "soc",
                y_label: "SOC (%)",
                color: Color32::GREEN,
                points: result.soc_series(),
            },
            Trace {
                id: "voltage",
                y_label: "Voltage (V)",
                color: Color32::BLUE,
                points: result.voltage_series(),
            },
            Trace {
                id: "current",
                y_label: "Current (A)",
                color: Color32::RED,
                points: result.current_series(),
            },
        ];
        let last = traces.len() - 1;

        for (i, trace) in traces.into_iter().enumerate() {
            let mut plot = Plot::new(format!("{}_plot_{}", trace.id, cell_index))
                .height(PLOT_HEIGHT)
                .include_x(0.0)
                .include_x(t_end)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .y_axis_label(trace.y_label);
            if i == last {
                plot = plot.x_axis_label("Time (s)");
            }

            let line = Line::new(PlotPoints::from(trace.points))
                .color(trace.color)
                .name(trace.y_label);
            plot.show(ui, |plot_ui| plot_ui.line(line));
        }
    }
}

use crate::views::CellView;
use cs_app::{SimulationCache, project_service, run_cell_cached};
use cs_chemistry::ChemistryCatalog;
use cs_project::{LayoutKind, Project};
use egui_file_dialog::FileDialog;
use std::path::PathBuf;
use tracing::warn;

/// Distinct requests kept before the memo is dropped.
const CACHE_LIMIT: usize = 1024;

pub struct CellSimApp {
    project: Project,
    project_path: Option<PathBuf>,
    catalog: Option<ChemistryCatalog>,
    cell_views: Vec<CellView>,
    active_cell: usize,
    cache: SimulationCache,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Save,
}

impl CellSimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_project(Project::tabbed_default(), None)
    }

    fn with_project(project: Project, project_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            project,
            project_path,
            catalog: None,
            cell_views: Vec::new(),
            active_cell: 0,
            cache: SimulationCache::new(),
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            status: None,
        };
        app.reset_views();
        app
    }

    fn set_project(&mut self, project: Project, path: Option<PathBuf>) {
        self.project = project;
        self.project_path = path;
        self.reset_views();
    }

    fn reset_views(&mut self) {
        self.cell_views = self.project.cells.iter().map(|_| CellView::default()).collect();
        self.active_cell = 0;
        self.cache.clear();
        self.catalog = match project_service::catalog_for(&self.project) {
            Ok(catalog) => {
                self.status = None;
                Some(catalog)
            }
            Err(e) => {
                self.status = Some(format!("Catalog error: {}", e));
                None
            }
        };
    }

    fn open_project(&mut self, path: PathBuf) {
        match project_service::load_project(&path) {
            Ok(project) => self.set_project(project, Some(path)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load project");
                self.status = Some(format!("Failed to load project: {}", e));
            }
        }
    }

    fn save_project_as(&mut self, path: PathBuf) {
        match project_service::save_project(&path, &self.project) {
            Ok(()) => {
                self.status = Some(format!("Saved {}", path.display()));
                self.project_path = Some(path);
            }
            Err(e) => self.status = Some(format!("Failed to save project: {}", e)),
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        self.show_toolbar(ctx);

        if self.cache.len() > CACHE_LIMIT {
            self.cache.clear();
        }

        // Cloned so the panels can borrow cells mutably
        let Some(catalog) = self.catalog.clone() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("No usable chemistry catalog. Open or create a project.");
            });
            return;
        };

        match self.project.layout {
            LayoutKind::Tabs => self.show_tabs(ctx, &catalog),
            LayoutKind::Sidebar => self.show_sidebar(ctx, &catalog),
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Tabs").clicked() {
                    self.set_project(Project::tabbed_default(), None);
                }
                if ui.button("New Sidebar").clicked() {
                    self.set_project(Project::sidebar_default(), None);
                }
                if ui.button("Open").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Open);
                    self.file_dialog.select_file();
                }
                if ui.button("Save").clicked() {
                    if let Some(path) = self.project_path.clone() {
                        self.save_project_as(path);
                    } else {
                        self.file_dialog_action = Some(FileDialogAction::Save);
                        self.file_dialog.save_file();
                    }
                }
                if ui.button("Save As").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Save);
                    self.file_dialog.save_file();
                }

                ui.separator();
                ui.label(format!("Cached runs: {}", self.cache.len()));

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Open) => self.open_project(path.to_path_buf()),
                Some(FileDialogAction::Save) => self.save_project_as(path.to_path_buf()),
                None => {}
            }
        }
    }

    fn show_tabs(&mut self, ctx: &egui::Context, catalog: &ChemistryCatalog) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("🔋 {}", self.project.name));
            ui.label("Configure, simulate, and monitor each battery cell independently.");
            ui.horizontal_wrapped(|ui| {
                for (i, cell) in self.project.cells.iter().enumerate() {
                    ui.selectable_value(&mut self.active_cell, i, cell.label.as_str());
                }
            });
            ui.separator();

            let i = self.active_cell;
            let (Some(cell), Some(view)) =
                (self.project.cells.get_mut(i), self.cell_views.get(i))
            else {
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                view.show_config_columns(ui, i, cell, catalog);
                let outcome = run_cell_cached(&mut self.cache, catalog, cell);
                view.show_report(ui, i, &outcome);
            });
        });
    }

    fn show_sidebar(&mut self, ctx: &egui::Context, catalog: &ChemistryCatalog) {
        let (Some(cell), Some(view)) = (self.project.cells.first_mut(), self.cell_views.first())
        else {
            return;
        };

        egui::SidePanel::left("config_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                view.show_config_sidebar(ui, 0, cell, catalog);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("🔋 {}", self.project.name));
            egui::ScrollArea::vertical().show(ui, |ui| {
                let outcome = run_cell_cached(&mut self.cache, catalog, cell);
                view.show_report(ui, 0, &outcome);
            });
        });
    }
}

impl eframe::App for CellSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

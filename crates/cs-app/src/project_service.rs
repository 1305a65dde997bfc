//! Project loading and saving for the frontends.

use crate::error::{AppError, AppResult};
use cs_chemistry::ChemistryCatalog;
use cs_project::Project;
use std::path::Path;
use tracing::info;

pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = cs_project::load(path)?;
    info!(
        path = %path.display(),
        cells = project.cells.len(),
        "project loaded"
    );
    Ok(project)
}

pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    cs_project::save(path, project)?;
    info!(path = %path.display(), "project saved");
    Ok(())
}

pub fn validate_project(project: &Project) -> AppResult<()> {
    cs_project::validate_project(project).map_err(|e| AppError::Project(e.to_string()))
}

pub fn catalog_for(project: &Project) -> AppResult<ChemistryCatalog> {
    Ok(project.build_catalog()?)
}

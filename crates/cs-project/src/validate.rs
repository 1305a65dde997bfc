//! Project validation logic.

use crate::limits::{DURATION_RANGE_S, PARALLEL_RANGE, SERIES_RANGE, SPEED_MULTIPLIER_RANGE};
use crate::schema::{CellDef, Project};
use cs_chemistry::ChemistryCatalog;
use std::collections::HashSet;
use std::ops::RangeInclusive;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty {what}")]
    Empty { what: &'static str },

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let catalog = project
        .build_catalog()
        .map_err(|e| ValidationError::Catalog(e.to_string()))?;
    if catalog.is_empty() {
        return Err(ValidationError::Empty { what: "catalog" });
    }

    if project.cells.is_empty() {
        return Err(ValidationError::Empty { what: "cells" });
    }

    let mut labels = HashSet::new();
    for cell in &project.cells {
        if !labels.insert(&cell.label) {
            return Err(ValidationError::DuplicateId {
                id: cell.label.clone(),
                context: "cells".to_string(),
            });
        }
        validate_cell(cell, &catalog)?;
    }

    Ok(())
}

pub fn validate_cell(cell: &CellDef, catalog: &ChemistryCatalog) -> Result<(), ValidationError> {
    if cell.label.trim().is_empty() {
        return Err(ValidationError::Empty { what: "cell label" });
    }
    if !catalog.contains(&cell.chemistry) {
        return Err(ValidationError::MissingReference {
            id: cell.chemistry.clone(),
            context: format!("cell '{}' chemistry", cell.label),
        });
    }
    check_range(&cell.label, "series", cell.series, &SERIES_RANGE)?;
    check_range(&cell.label, "parallel", cell.parallel, &PARALLEL_RANGE)?;
    check_range(&cell.label, "duration_s", cell.duration_s, &DURATION_RANGE_S)?;
    check_range(
        &cell.label,
        "speed_multiplier",
        cell.speed_multiplier,
        &SPEED_MULTIPLIER_RANGE,
    )?;
    Ok(())
}

fn check_range(
    label: &str,
    field: &str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: format!("{label}.{field}"),
            value: value.to_string(),
            reason: format!("must be within {}..={}", range.start(), range.end()),
        })
    }
}

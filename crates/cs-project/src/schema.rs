//! Project schema definitions.

use crate::limits::{
    DEFAULT_DURATION_S, DEFAULT_PARALLEL, DEFAULT_SERIES, DEFAULT_SPEED_MULTIPLIER, TAB_COUNT,
};
use cs_chemistry::{CatalogPreset, ChemistryCatalog, ChemistryProfile, ChemistryResult};
use cs_sim::Mode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub catalog: CatalogDef,
    #[serde(default)]
    pub layout: LayoutKind,
    #[serde(default)]
    pub cells: Vec<CellDef>,
}

impl Project {
    /// Eight independent tabs over the full catalog.
    pub fn tabbed_default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Battery Cell Simulator".to_string(),
            catalog: CatalogDef::preset(CatalogPreset::Reference),
            layout: LayoutKind::Tabs,
            cells: (1..=TAB_COUNT)
                .map(|i| CellDef::with_label(format!("Cell {i}")))
                .collect(),
        }
    }

    /// A single cell driven from a side panel over the compact catalog.
    pub fn sidebar_default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Battery Simulator".to_string(),
            catalog: CatalogDef::preset(CatalogPreset::Compact),
            layout: LayoutKind::Sidebar,
            cells: vec![CellDef::with_label("Cell 1")],
        }
    }

    pub fn build_catalog(&self) -> ChemistryResult<ChemistryCatalog> {
        self.catalog.build()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogDef {
    Preset { preset: CatalogPreset },
    Custom { entries: Vec<ChemistryProfile> },
}

impl Default for CatalogDef {
    fn default() -> Self {
        Self::preset(CatalogPreset::Reference)
    }
}

impl CatalogDef {
    pub fn preset(preset: CatalogPreset) -> Self {
        Self::Preset { preset }
    }

    pub fn custom(entries: Vec<ChemistryProfile>) -> Self {
        Self::Custom { entries }
    }

    pub fn build(&self) -> ChemistryResult<ChemistryCatalog> {
        match self {
            Self::Preset { preset } => Ok(preset.build()),
            Self::Custom { entries } => ChemistryCatalog::new(entries.iter().cloned()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Tabs,
    Sidebar,
}

/// Control values of one dashboard cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellDef {
    pub label: String,
    pub chemistry: String,
    pub series: u32,
    pub parallel: u32,
    #[serde(default)]
    pub mode: Mode,
    pub duration_s: u32,
    /// Accepted and stored, never applied to the simulation.
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: u32,
}

impl CellDef {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl Default for CellDef {
    fn default() -> Self {
        Self {
            label: "Cell 1".to_string(),
            chemistry: "Lithium-Ion".to_string(),
            series: DEFAULT_SERIES,
            parallel: DEFAULT_PARALLEL,
            mode: Mode::Charging,
            duration_s: DEFAULT_DURATION_S,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        }
    }
}

fn default_speed_multiplier() -> u32 {
    DEFAULT_SPEED_MULTIPLIER
}

impl CellDef {
    /// Copy with every numeric control pulled into its widget range.
    pub fn clamped(&self) -> Self {
        use crate::limits::{
            DURATION_RANGE_S, PARALLEL_RANGE, SERIES_RANGE, SPEED_MULTIPLIER_RANGE, clamp_to,
        };
        Self {
            series: clamp_to(self.series, &SERIES_RANGE),
            parallel: clamp_to(self.parallel, &PARALLEL_RANGE),
            duration_s: clamp_to(self.duration_s, &DURATION_RANGE_S),
            speed_multiplier: clamp_to(self.speed_multiplier, &SPEED_MULTIPLIER_RANGE),
            ..self.clone()
        }
    }
}

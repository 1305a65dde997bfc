use crate::error::{ChemistryError, ChemistryResult};
use crate::profile::ChemistryProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in catalog selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPreset {
    /// All eight chemistries.
    #[default]
    Reference,
    /// Lithium-Ion, Lead-Acid, NiMH and Solid-State only.
    Compact,
}

impl CatalogPreset {
    pub fn build(self) -> ChemistryCatalog {
        match self {
            Self::Reference => reference_catalog(),
            Self::Compact => compact_catalog(),
        }
    }
}

/// (name, volts per cell, amp-hours per cell, round-trip efficiency)
const REFERENCE_ENTRIES: [(&str, f64, f64, f64); 8] = [
    ("Lithium-Ion", 3.7, 2.5, 0.95),
    ("Lead-Acid", 2.0, 5.0, 0.85),
    ("NiMH", 1.2, 2.0, 0.75),
    ("Solid-State", 3.8, 3.0, 0.98),
    ("NMC", 3.7, 2.8, 0.95),
    ("LFP", 3.2, 3.0, 0.98),
    ("LCO", 3.7, 2.5, 0.92),
    ("LMO", 3.7, 2.2, 0.90),
];

const COMPACT_LEN: usize = 4;

/// Read-only mapping from chemistry name to profile.
///
/// Entries keep their insertion order so selectors list them the way the
/// catalog was written.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemistryCatalog {
    entries: Vec<ChemistryProfile>,
    index: HashMap<String, usize>,
}

impl ChemistryCatalog {
    pub fn new(entries: impl IntoIterator<Item = ChemistryProfile>) -> ChemistryResult<Self> {
        let entries: Vec<ChemistryProfile> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.name().to_string(), i).is_some() {
                return Err(ChemistryError::DuplicateName {
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    pub fn lookup(&self, name: &str) -> ChemistryResult<&ChemistryProfile> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ChemistryError::UnknownChemistry {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ChemistryProfile::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChemistryProfile> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&ChemistryProfile> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn preset(count: usize) -> ChemistryCatalog {
    let entries: Vec<ChemistryProfile> = REFERENCE_ENTRIES
        .iter()
        .take(count)
        .map(|&(name, v, ah, eff)| ChemistryProfile::built_in(name, v, ah, eff))
        .collect();
    let index = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.name().to_string(), i))
        .collect();
    ChemistryCatalog { entries, index }
}

pub fn reference_catalog() -> ChemistryCatalog {
    preset(REFERENCE_ENTRIES.len())
}

pub fn compact_catalog() -> ChemistryCatalog {
    preset(COMPACT_LEN)
}

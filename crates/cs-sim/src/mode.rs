use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Charging,
    Discharging,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Charging, Mode::Discharging];

    /// +1 for charging, -1 for discharging. Positive current flows into the pack.
    pub fn sign(self) -> f64 {
        match self {
            Self::Charging => 1.0,
            Self::Discharging => -1.0,
        }
    }

    /// SOC in percent before the first step.
    pub fn initial_soc(self) -> f64 {
        match self {
            Self::Charging => 0.0,
            Self::Discharging => 100.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognised mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mode '{0}' (expected Charging or Discharging)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "charging" | "charge" => Ok(Self::Charging),
            "discharging" | "discharge" => Ok(Self::Discharging),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

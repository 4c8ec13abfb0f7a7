//! Grid position (1-9) and performance tier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Level on one axis of the talent grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisLevel {
    Low,
    Medium,
    High,
}

impl AxisLevel {
    fn from_index(index: u8) -> Self {
        match index {
            0 => AxisLevel::Low,
            1 => AxisLevel::Medium,
            _ => AxisLevel::High,
        }
    }
}

/// A cell of the 3x3 talent grid.
///
/// Positions are numbered `(potential - 1) * 3 + performance`, so position 1
/// is low performance / low potential and position 9 is high / high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridPosition(u8);

impl GridPosition {
    /// Lowest valid position.
    pub const MIN: u8 = 1;

    /// Highest valid position.
    pub const MAX: u8 = 9;

    /// Creates a GridPosition, returning error if outside 1..=9.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "grid_position",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns all nine positions in ascending order.
    pub fn all() -> impl Iterator<Item = GridPosition> {
        (Self::MIN..=Self::MAX).map(GridPosition)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the performance axis level.
    pub fn performance(&self) -> AxisLevel {
        AxisLevel::from_index((self.0 - 1) % 3)
    }

    /// Returns the potential axis level.
    pub fn potential(&self) -> AxisLevel {
        AxisLevel::from_index((self.0 - 1) / 3)
    }

    /// Returns the tier this position collapses into.
    pub fn tier(&self) -> Tier {
        match self.0 {
            9 | 8 | 6 => Tier::High,
            7 | 5 | 3 => Tier::Medium,
            _ => Tier::Low,
        }
    }

    /// Returns the display label for the box.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Underperformer",
            2 => "Effective Pro",
            3 => "Workhorse",
            4 => "Inconsistent",
            5 => "Core Talent",
            6 => "High Impact",
            7 => "Enigma",
            8 => "Growth",
            _ => "Star",
        }
    }
}

impl TryFrom<u8> for GridPosition {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<GridPosition> for u8 {
    fn from(position: GridPosition) -> Self {
        position.0
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collapsed grouping of grid positions used to stabilize small samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    High,
    Medium,
    Low,
}

impl Tier {
    /// Canonical column order for tier tables.
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    /// Returns the column index of this tier in [`Tier::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Tier::High => 0,
            Tier::Medium => 1,
            Tier::Low => 2,
        }
    }

    /// Returns the human-readable noun used in interpretations.
    pub fn performer_label(&self) -> &'static str {
        match self {
            Tier::High => "high performers",
            Tier::Medium => "core performers",
            Tier::Low => "low performers",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Tier::High),
            "medium" => Ok(Tier::Medium),
            "low" => Ok(Tier::Low),
            other => Err(ValidationError::invalid_format(
                "tier",
                format!("unknown tier '{}'", other),
            )),
        }
    }
}

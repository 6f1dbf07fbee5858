use serde::Deserialize;
use std::fmt;

/// Length units a distance can be reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl LengthUnit {
    /// All units in menu order
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Feet,
        LengthUnit::Miles,
    ];

    /// Look up a unit by its menu index
    pub fn from_index(index: usize) -> Option<LengthUnit> {
        Self::ALL.get(index).copied()
    }

    /// Multiplier converting meters into this unit
    pub fn meters_factor(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 0.001,
            LengthUnit::Feet => 3.2808399,
            LengthUnit::Miles => 0.00062137119,
        }
    }

    /// Convert a length in meters into this unit
    pub fn convert_meters(self, meters: f64) -> f64 {
        meters * self.meters_factor()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Meters => "Meters",
            LengthUnit::Kilometers => "Kilometers",
            LengthUnit::Feet => "Feet",
            LengthUnit::Miles => "Miles",
        };
        f.pad(name)
    }
}

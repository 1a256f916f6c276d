//! Measurement unit reference data.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of a measurement unit.
///
/// Stored in the database as a single character (`W` or `V`). The
/// classification is reference data only; no conversion arithmetic is
/// performed between units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Weight units (g, kg)
    Weight,

    /// Volume units (mL, L, tsp, tbsp, oz, c)
    Volume,
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(UnitKind::Weight),
            "V" => Ok(UnitKind::Volume),
            _ => Err(format!("Invalid unit kind: {s}")),
        }
    }
}

impl UnitKind {
    /// Convert to the single-character database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Weight => "W",
            UnitKind::Volume => "V",
        }
    }
}

/// A measurement unit from the static reference table.
///
/// Units are seeded once when the database is created and never mutated by
/// the application. Ingredients and measures reference them by abbreviation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    /// Unique identifier for the unit
    pub id: i64,

    /// Short form used everywhere the unit is referenced (e.g. "g", "mL")
    pub abbreviation: String,

    /// Whether the unit measures weight or volume
    pub kind: UnitKind,
}

//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so the models stay plain data.
//! All output is markdown, rendered by the terminal layer.

use std::fmt;

use crate::models::{Ingredient, Measure, Recipe, Unit, UnitKind};

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Weight => write!(f, "weight"),
            UnitKind::Volume => write!(f, "volume"),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} ({})", self.abbreviation, self.kind)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Cost: {} per {}", self.unit_cost, self.unit)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Yield: {}", self.yield_amount)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {} {}", self.quantity, self.unit, self.ingredient)
    }
}

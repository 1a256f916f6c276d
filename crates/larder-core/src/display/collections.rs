//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its elements through their own Display
//! implementations and renders a fixed message for an empty collection.

use std::{fmt, ops::Index};

use crate::models::{Ingredient, Measure, Recipe, Unit};

macro_rules! collection_wrapper {
    ($(#[$doc:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$doc])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection_wrapper!(
    /// Newtype wrapper for displaying collections of ingredients.
    Ingredients,
    Ingredient,
    "No ingredients found."
);

collection_wrapper!(
    /// Newtype wrapper for displaying collections of recipes.
    Recipes,
    Recipe,
    "No recipes found."
);

collection_wrapper!(
    /// Newtype wrapper for displaying a recipe's measures.
    Measures,
    Measure,
    "No measures found."
);

collection_wrapper!(
    /// Newtype wrapper for displaying the unit reference table.
    Units,
    Unit,
    "No units found."
);

//! Per-category weight tables aligned with catalog order

use crate::catalog::{Category, LayerCatalog};
use crate::io::configuration::{
    DEFAULT_BACKGROUND_WEIGHT, DEFAULT_CLASS_WEIGHT, DEFAULT_HIDDEN_TRAIT_WEIGHT,
    DEFAULT_ITEM_WEIGHT,
};
use crate::io::error::{GenerationError, Result};

/// Relative selection weights for the options of one category
///
/// Only relative magnitude matters; weights need not sum to any total.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    /// Validate raw weights for the options of `category`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The weight count differs from the option count
    /// - Any weight is negative, NaN or infinite
    /// - No weight is positive
    pub fn new(catalog: &LayerCatalog, category: Category, weights: Vec<f64>) -> Result<Self> {
        let options = catalog.options(category);
        if weights.len() != options.len() {
            return Err(GenerationError::WeightCountMismatch {
                category: category.label(),
                expected: options.len(),
                found: weights.len(),
            });
        }

        for (option, &value) in options.iter().zip(&weights) {
            if !value.is_finite() || value < 0.0 {
                return Err(GenerationError::InvalidWeight {
                    category: category.label(),
                    option: option.id.clone(),
                    value,
                });
            }
        }

        let table = Self { weights };
        if table.selectable_count() == 0 {
            return Err(GenerationError::EmptyCategory {
                category: category.label(),
            });
        }
        Ok(table)
    }

    /// Same weight for every option
    pub fn flat(len: usize, weight: f64) -> Self {
        Self {
            weights: vec![weight; len],
        }
    }

    /// Raw weights in catalog order
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of the option at `index`, zero when out of range
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }

    /// Number of weights in the table
    pub const fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table holds no weights
    pub const fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Number of options with a positive weight
    pub fn selectable_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0.0).count()
    }
}

/// One weight table per category
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTables {
    tables: [WeightTable; 4],
}

impl WeightTables {
    /// Validate one raw weight list per category, in combination order
    ///
    /// # Errors
    ///
    /// Returns the first validation error raised by [`WeightTable::new`]
    pub fn new(catalog: &LayerCatalog, weights: [Vec<f64>; 4]) -> Result<Self> {
        let [classes, items, hidden_traits, backgrounds] = weights;
        Ok(Self {
            tables: [
                WeightTable::new(catalog, Category::Class, classes)?,
                WeightTable::new(catalog, Category::Item, items)?,
                WeightTable::new(catalog, Category::HiddenTrait, hidden_traits)?,
                WeightTable::new(catalog, Category::Background, backgrounds)?,
            ],
        })
    }

    /// Weight 1 for every option in every category
    pub fn uniform(catalog: &LayerCatalog) -> Self {
        Self {
            tables: Category::ALL.map(|category| {
                WeightTable::flat(catalog.options(category).len(), 1.0)
            }),
        }
    }

    /// Category-specific flat weights from the default configuration
    pub fn flat_defaults(catalog: &LayerCatalog) -> Self {
        Self {
            tables: Category::ALL.map(|category| {
                WeightTable::flat(catalog.options(category).len(), default_weight(category))
            }),
        }
    }

    /// Table of a category
    pub fn table(&self, category: Category) -> &WeightTable {
        match category {
            Category::Class => &self.tables[0],
            Category::Item => &self.tables[1],
            Category::HiddenTrait => &self.tables[2],
            Category::Background => &self.tables[3],
        }
    }

    /// Number of distinct combinations that can actually be drawn
    ///
    /// Zero-weight options are never selected and do not count. Saturates
    /// at `u64::MAX`.
    pub fn capacity(&self) -> u64 {
        self.tables
            .iter()
            .try_fold(1_u64, |acc, table| {
                acc.checked_mul(table.selectable_count() as u64)
            })
            .unwrap_or(u64::MAX)
    }
}

/// Flat weight applied to a category when nothing else is configured
pub const fn default_weight(category: Category) -> f64 {
    match category {
        Category::Class => DEFAULT_CLASS_WEIGHT,
        Category::Item => DEFAULT_ITEM_WEIGHT,
        Category::HiddenTrait => DEFAULT_HIDDEN_TRAIT_WEIGHT,
        Category::Background => DEFAULT_BACKGROUND_WEIGHT,
    }
}

//! Weight configuration files mapping option identifiers to weights
//!
//! ```json
//! { "classes": { "Warrior": 3 }, "backgrounds": { "Night": 0 } }
//! ```
//!
//! Categories and options left out keep the category's default flat weight.

use crate::catalog::{Category, LayerCatalog};
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::sampling::weights::{WeightTables, default_weight};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Per-option weight overrides, keyed by category then option identifier
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    /// Class weights
    #[serde(default)]
    pub classes: BTreeMap<String, f64>,
    /// Item weights
    #[serde(default)]
    pub items: BTreeMap<String, f64>,
    /// Hidden trait weights
    #[serde(default)]
    pub hidden_traits: BTreeMap<String, f64>,
    /// Background weights
    #[serde(default)]
    pub backgrounds: BTreeMap<String, f64>,
}

impl WeightConfig {
    /// Load overrides from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not parse
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| file_system_error(path, "open file", e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| GenerationError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Overrides for one category
    pub const fn overrides(&self, category: Category) -> &BTreeMap<String, f64> {
        match category {
            Category::Class => &self.classes,
            Category::Item => &self.items,
            Category::HiddenTrait => &self.hidden_traits,
            Category::Background => &self.backgrounds,
        }
    }

    /// Expand the overrides into full weight tables for a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An override names an option missing from the catalog
    /// - A resulting weight is invalid or a category ends up all zero
    pub fn resolve(&self, catalog: &LayerCatalog) -> Result<WeightTables> {
        let expand = |category: Category| -> Result<Vec<f64>> {
            let overrides = self.overrides(category);
            let options = catalog.options(category);

            if let Some(unknown) = overrides
                .keys()
                .find(|id| !options.iter().any(|option| &&option.id == id))
            {
                return Err(GenerationError::UnknownOption {
                    category: category.label(),
                    option: unknown.clone(),
                });
            }

            Ok(options
                .iter()
                .map(|option| {
                    overrides
                        .get(&option.id)
                        .copied()
                        .unwrap_or_else(|| default_weight(category))
                })
                .collect())
        };

        WeightTables::new(
            catalog,
            [
                expand(Category::Class)?,
                expand(Category::Item)?,
                expand(Category::HiddenTrait)?,
                expand(Category::Background)?,
            ],
        )
    }
}

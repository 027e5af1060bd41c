//! Layer discovery and the in-memory option catalog

use crate::catalog::Category;
use crate::io::configuration::{CLASSES_DIR, HIDDEN_TRAITS_DIR, ITEMS_DIR};
use crate::io::error::{GenerationError, Result, file_system_error};
use std::path::{Path, PathBuf};

/// A named image asset belonging to one category
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerOption {
    /// File name minus its extension, used in metadata and weight files
    pub id: String,
    /// File name including extension
    pub file_name: String,
    /// Full path to the image file
    pub path: PathBuf,
}

impl LayerOption {
    /// Create an option for `file_name` located inside `directory`
    pub fn new(directory: &Path, file_name: &str) -> Self {
        Self {
            id: strip_extension(file_name).to_string(),
            file_name: file_name.to_string(),
            path: directory.join(file_name),
        }
    }

    /// Create an option from a full file path
    ///
    /// Returns `None` when the path has no UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        Some(Self {
            id: strip_extension(file_name).to_string(),
            file_name: file_name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Remove the final extension from a file name (`Warrior.png` becomes `Warrior`)
pub fn strip_extension(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// Explicit category-to-options mapping, loaded once per batch
///
/// Options within a category keep lexicographic file name order, which is
/// also the order weight tables are aligned with.
#[derive(Clone, Debug)]
pub struct LayerCatalog {
    options: [Vec<LayerOption>; 4],
}

impl LayerCatalog {
    /// Build a catalog from explicit option lists
    ///
    /// Each list is sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCategory`] if any list is empty
    pub fn from_options(
        classes: Vec<LayerOption>,
        items: Vec<LayerOption>,
        hidden_traits: Vec<LayerOption>,
        backgrounds: Vec<LayerOption>,
    ) -> Result<Self> {
        let mut options = [classes, items, hidden_traits, backgrounds];

        for (category, list) in Category::ALL.iter().zip(options.iter_mut()) {
            if list.is_empty() {
                return Err(GenerationError::EmptyCategory {
                    category: category.label(),
                });
            }
            list.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        }

        Ok(Self { options })
    }

    /// Build a catalog from bare file names rooted at per-category directories
    ///
    /// Handy for exercising sampling without any files on disk.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCategory`] if any list is empty
    pub fn from_file_names(
        layers_root: &Path,
        backgrounds_dir: &Path,
        names: [&[&str]; 4],
    ) -> Result<Self> {
        let [classes, items, hidden_traits, backgrounds] = names;
        let build = |dir: PathBuf, list: &[&str]| -> Vec<LayerOption> {
            list.iter().map(|name| LayerOption::new(&dir, name)).collect()
        };

        Self::from_options(
            build(layers_root.join(CLASSES_DIR), classes),
            build(layers_root.join(ITEMS_DIR), items),
            build(layers_root.join(HIDDEN_TRAITS_DIR), hidden_traits),
            build(backgrounds_dir.to_path_buf(), backgrounds),
        )
    }

    /// Discover layer images on disk
    ///
    /// Reads `classes/`, `items/` and `hidden_traits/` under `layers_root`
    /// plus every image directly inside `backgrounds_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A category directory is missing or cannot be read
    /// - A category directory contains no image files
    pub fn from_directories(layers_root: &Path, backgrounds_dir: &Path) -> Result<Self> {
        let catalog = Self::from_options(
            discover_options(&layers_root.join(CLASSES_DIR))?,
            discover_options(&layers_root.join(ITEMS_DIR))?,
            discover_options(&layers_root.join(HIDDEN_TRAITS_DIR))?,
            discover_options(backgrounds_dir)?,
        )?;

        for category in Category::ALL {
            log::debug!(
                "Discovered {} {} options",
                catalog.options(category).len(),
                category.label()
            );
        }

        Ok(catalog)
    }

    /// Options of a category in catalog order
    pub fn options(&self, category: Category) -> &[LayerOption] {
        self.options
            .get(category.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Option at `index` within a category
    pub fn option(&self, category: Category, index: usize) -> Option<&LayerOption> {
        self.options(category).get(index)
    }

    /// Number of options per category in combination order
    pub fn option_counts(&self) -> [usize; 4] {
        Category::ALL.map(|category| self.options(category).len())
    }

    /// Total number of distinct combinations, ignoring weights
    ///
    /// Saturates at `u64::MAX`.
    pub fn combination_space(&self) -> u64 {
        self.option_counts()
            .iter()
            .try_fold(1_u64, |acc, &count| acc.checked_mul(count as u64))
            .unwrap_or(u64::MAX)
    }
}

/// List image files in a directory, sorted by file name
///
/// Subdirectories, hidden files and files whose extension is not a known
/// image format are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn discover_options(dir: &Path) -> Result<Vec<LayerOption>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read directory", e))?;

    let mut options = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read directory entry", e))?
            .path();

        if !path.is_file() || image::ImageFormat::from_path(&path).is_err() {
            continue;
        }

        if let Some(option) = LayerOption::from_path(&path) {
            if !option.file_name.starts_with('.') {
                options.push(option);
            }
        }
    }

    options.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(options)
}

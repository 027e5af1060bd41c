//! Metadata records and their JSON serialization

use crate::catalog::Category;
use crate::catalog::inventory::strip_extension;
use crate::io::configuration::{COLLECTION_DESCRIPTION, INDEX_WIDTH, NAME_PREFIX};
use crate::io::error::{GenerationError, Result, file_system_error};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Metadata document written alongside every composed image
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    /// Display name incorporating the padded index
    pub name: String,
    /// Collection description shared by every item
    pub description: String,
    /// File name of the composed image
    pub image: String,
    /// Sequential 1-based index
    pub edition: usize,
    /// One attribute per category
    pub attributes: Vec<Attribute>,
}

/// A (trait category, value) pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Category label such as `Hidden Trait`
    pub trait_type: String,
    /// Option identifier without file extension
    pub value: String,
}

impl NftMetadata {
    /// Build the record for item `index`
    ///
    /// `chosen` pairs each category with the file name picked for it;
    /// extensions are stripped from the attribute values.
    pub fn new(index: usize, image_file_name: &str, chosen: &[(Category, &str)]) -> Self {
        let attributes = chosen
            .iter()
            .map(|&(category, file_name)| Attribute {
                trait_type: category.label().to_string(),
                value: strip_extension(file_name).to_string(),
            })
            .collect();

        Self {
            name: format!("{NAME_PREFIX}{}", padded_index(index)),
            description: COLLECTION_DESCRIPTION.to_string(),
            image: image_file_name.to_string(),
            edition: index,
            attributes,
        }
    }

    /// Value of the attribute for a category, if present
    pub fn attribute(&self, category: Category) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.trait_type == category.label())
            .map(|attr| attr.value.as_str())
    }
}

/// Sequential index zero-padded to the configured width (`7` becomes `0007`)
pub fn padded_index(index: usize) -> String {
    format!("{index:0width$}", width = INDEX_WIDTH)
}

/// Serialize a metadata document as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn write_metadata(metadata: &NftMetadata, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let file = File::create(path).map_err(|e| file_system_error(path, "create file", e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, metadata).map_err(|e| GenerationError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush file", e))
}

/// Read a metadata document back from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid document
pub fn read_metadata(path: &Path) -> Result<NftMetadata> {
    let file = File::open(path).map_err(|e| file_system_error(path, "open file", e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| GenerationError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

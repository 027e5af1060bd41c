//! Batch orchestration: sample, composite and write one NFT per iteration

use crate::catalog::{Category, LayerCatalog};
use crate::compose::composite_stack;
use crate::io::configuration::{
    IMAGE_EXTENSION, IMAGE_FILE_PREFIX, IMAGES_SUBDIR, METADATA_EXTENSION, METADATA_SUBDIR,
};
use crate::io::error::{Result, file_system_error};
use crate::io::image::export_png;
use crate::io::metadata::{NftMetadata, padded_index, write_metadata};
use crate::sampling::{Combination, CombinationSampler, WeightTables};
use std::path::{Path, PathBuf};

/// Where composed images and metadata documents are written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory receiving composed images
    pub images_dir: PathBuf,
    /// Directory receiving metadata documents
    pub metadata_dir: PathBuf,
}

impl OutputLayout {
    /// Standard `images/` and `metadata/` subdirectories of `output_root`
    pub fn new(output_root: &Path) -> Self {
        Self {
            images_dir: output_root.join(IMAGES_SUBDIR),
            metadata_dir: output_root.join(METADATA_SUBDIR),
        }
    }

    /// Image file name for item `index`, e.g. `NFT_0001.png`
    pub fn image_file_name(index: usize) -> String {
        format!(
            "{IMAGE_FILE_PREFIX}{}.{IMAGE_EXTENSION}",
            padded_index(index)
        )
    }

    /// Metadata file name for item `index`, e.g. `0001.json`
    pub fn metadata_file_name(index: usize) -> String {
        format!("{}.{METADATA_EXTENSION}", padded_index(index))
    }

    /// Full path of the composed image for item `index`
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.images_dir.join(Self::image_file_name(index))
    }

    /// Full path of the metadata document for item `index`
    pub fn metadata_path(&self, index: usize) -> PathBuf {
        self.metadata_dir.join(Self::metadata_file_name(index))
    }

    /// Create both output directories
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be created
    pub fn create_dirs(&self) -> Result<()> {
        for dir in [&self.images_dir, &self.metadata_dir] {
            std::fs::create_dir_all(dir)
                .map_err(|e| file_system_error(dir.as_path(), "create directory", e))?;
        }
        Ok(())
    }
}

/// Batch parameters
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Number of NFTs to generate
    pub count: usize,
    /// Seed for the sampler's random source
    pub seed: u64,
    /// Output destinations
    pub output: OutputLayout,
    /// Redraws allowed per combination, derived from the space size when unset
    pub max_attempts: Option<u64>,
}

/// One generated NFT, as persisted
#[derive(Clone, Debug)]
pub struct NftRecord {
    /// Sequential 1-based index
    pub index: usize,
    /// Options chosen for this item
    pub combination: Combination,
    /// Path of the composed image
    pub image_path: PathBuf,
    /// Path of the metadata document
    pub metadata_path: PathBuf,
    /// Metadata written for this item
    pub metadata: NftMetadata,
}

/// Drives `INIT -> {SAMPLE -> COMPOSITE -> WRITE} x N -> DONE`
///
/// The generated set lives inside the sampler and is scoped to this driver,
/// so every driver represents exactly one batch.
pub struct BatchDriver {
    catalog: LayerCatalog,
    sampler: CombinationSampler,
    config: GenerationConfig,
}

impl BatchDriver {
    /// Wire a catalog and its weight tables into a fresh batch
    pub fn new(catalog: LayerCatalog, weights: WeightTables, config: GenerationConfig) -> Self {
        let sampler = CombinationSampler::new(weights, config.seed);
        let sampler = match config.max_attempts {
            Some(max_attempts) => sampler.with_max_attempts(max_attempts),
            None => sampler,
        };

        Self {
            catalog,
            sampler,
            config,
        }
    }

    /// Catalog the batch draws from
    pub const fn catalog(&self) -> &LayerCatalog {
        &self.catalog
    }

    /// Sampler holding the batch's generated set
    pub const fn sampler(&self) -> &CombinationSampler {
        &self.sampler
    }

    /// Batch parameters
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the whole batch
    ///
    /// # Errors
    ///
    /// See [`Self::run_with`]
    pub fn run(&mut self) -> Result<Vec<NftRecord>> {
        self.run_with(|_| {})
    }

    /// Run the whole batch, calling `on_item` after each item is persisted
    ///
    /// The capacity check happens before anything touches the filesystem.
    /// Any error aborts the batch; items already written stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested count exceeds the combination space
    /// - The output directories cannot be created
    /// - Any item fails to sample, composite or write
    pub fn run_with<F>(&mut self, mut on_item: F) -> Result<Vec<NftRecord>>
    where
        F: FnMut(&NftRecord),
    {
        let count = self.config.count;
        self.sampler.ensure_capacity(count)?;
        self.config.output.create_dirs()?;

        log::info!(
            "Generating {count} NFTs from {} combinations (seed {})",
            self.sampler.capacity(),
            self.config.seed
        );

        let mut records = Vec::with_capacity(count);
        for index in 1..=count {
            let record = self.generate_item(index)?;
            on_item(&record);
            records.push(record);
        }

        log::info!(
            "Generated {} NFTs into {}",
            records.len(),
            self.config.output.images_dir.display()
        );
        Ok(records)
    }

    /// Sample, composite and persist item `index`
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails, a layer cannot be loaded or
    /// lined up, or either output file cannot be written
    pub fn generate_item(&mut self, index: usize) -> Result<NftRecord> {
        let combination = self.sampler.next_unique()?;
        let [class, item, hidden_trait, background] = combination.resolve(&self.catalog)?;

        let image_path = self.config.output.image_path(index);
        {
            // Background at the bottom, hidden trait on top
            let composed = composite_stack(&[background, class, item, hidden_trait])?;
            export_png(&composed, &image_path)?;
        }

        let chosen = [
            (Category::Class, class.file_name.as_str()),
            (Category::Item, item.file_name.as_str()),
            (Category::HiddenTrait, hidden_trait.file_name.as_str()),
            (Category::Background, background.file_name.as_str()),
        ];
        let metadata = NftMetadata::new(index, &OutputLayout::image_file_name(index), &chosen);
        let metadata_path = self.config.output.metadata_path(index);
        write_metadata(&metadata, &metadata_path)?;

        Ok(NftRecord {
            index,
            combination,
            image_path,
            metadata_path,
            metadata,
        })
    }
}

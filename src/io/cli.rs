//! Command-line interface for batch NFT generation

use crate::catalog::LayerCatalog;
use crate::generation::{BatchDriver, GenerationConfig, NftRecord, OutputLayout};
use crate::io::configuration::{
    DEFAULT_BACKGROUNDS_DIR, DEFAULT_COUNT, DEFAULT_LAYERS_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::weights::WeightConfig;
use crate::sampling::WeightTables;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layered-nft")]
#[command(
    author,
    version,
    about = "Generate unique layered NFT images and metadata from weighted layer pools"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Number of unique NFTs to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory holding the classes, items and `hidden_traits` subdirectories
    #[arg(short, long, default_value = DEFAULT_LAYERS_DIR)]
    pub layers: PathBuf,

    /// Directory holding background images
    #[arg(short, long, default_value = DEFAULT_BACKGROUNDS_DIR)]
    pub backgrounds: PathBuf,

    /// Output root receiving images/ and metadata/
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// JSON file of per-option weights (defaults to flat weights per category)
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Maximum full redraws per NFT before giving up; heavily skewed weights can exhaust it before the batch fills
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Suppress progress output; use with RUST_LOG=debug so log lines do not break the bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Batch parameters described by the arguments
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            count: self.count,
            seed: self.seed,
            output: OutputLayout::new(&self.output),
            max_attempts: self.max_attempts,
        }
    }
}

/// Loads inputs, runs the batch and reports progress
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the catalog and weights, then generate every NFT
    ///
    /// # Errors
    ///
    /// Returns an error if the layer directories, the weight file, the
    /// requested count or any generated item is invalid
    pub fn process(&mut self) -> Result<Vec<NftRecord>> {
        let catalog = LayerCatalog::from_directories(&self.cli.layers, &self.cli.backgrounds)?;
        let weights = self.load_weights(&catalog)?;

        let mut driver = BatchDriver::new(catalog, weights, self.cli.generation_config());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let progress = &mut self.progress_manager;
        let records = driver.run_with(|record| {
            if let Some(pm) = progress.as_mut() {
                pm.complete_item(record.index, &OutputLayout::image_file_name(record.index));
            }
        })?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(records)
    }

    fn load_weights(&self, catalog: &LayerCatalog) -> Result<WeightTables> {
        match self.cli.weights {
            Some(ref path) => {
                log::info!("Loading weights from {}", path.display());
                WeightConfig::from_file(path)?.resolve(catalog)
            }
            None => WeightConfig::default().resolve(catalog),
        }
    }
}

//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Number of NFTs generated when no count is given
pub const DEFAULT_COUNT: usize = 1000;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Input layout
/// Root directory holding one subdirectory per layer category
pub const DEFAULT_LAYERS_DIR: &str = "layers";
/// Directory holding background images
pub const DEFAULT_BACKGROUNDS_DIR: &str = "backgrounds";
/// Subdirectory of the layers root holding class images
pub const CLASSES_DIR: &str = "classes";
/// Subdirectory of the layers root holding item images
pub const ITEMS_DIR: &str = "items";
/// Subdirectory of the layers root holding hidden trait images
pub const HIDDEN_TRAITS_DIR: &str = "hidden_traits";

// Output layout
/// Root directory for generated output
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Subdirectory of the output root receiving composed images
pub const IMAGES_SUBDIR: &str = "images";
/// Subdirectory of the output root receiving metadata documents
pub const METADATA_SUBDIR: &str = "metadata";
/// Prefix of every composed image filename
pub const IMAGE_FILE_PREFIX: &str = "NFT_";
/// Extension of composed images
pub const IMAGE_EXTENSION: &str = "png";
/// Extension of metadata documents
pub const METADATA_EXTENSION: &str = "json";
/// Width of the zero-padded sequential index in filenames
pub const INDEX_WIDTH: usize = 4;

// Metadata shaping
/// Prefix of every display name, followed by the padded index
pub const NAME_PREFIX: &str = "ROE #";
/// Description shared by every item of the collection
pub const COLLECTION_DESCRIPTION: &str =
    "A unique hero of the realm, assembled from class, item, hidden trait and background layers.";

// Flat per-category weights; higher weight means more common
/// Default weight of every class option
pub const DEFAULT_CLASS_WEIGHT: f64 = 1.0;
/// Default weight of every item option
pub const DEFAULT_ITEM_WEIGHT: f64 = 5.0;
/// Default weight of every hidden trait option
pub const DEFAULT_HIDDEN_TRAIT_WEIGHT: f64 = 5.0;
/// Default weight of every background option
pub const DEFAULT_BACKGROUND_WEIGHT: f64 = 1.0;

// Retry bounds for the unique sampler
/// Attempts allowed per combination regardless of space size
pub const MIN_SAMPLING_ATTEMPTS: u64 = 1_000;
/// Attempts allowed per combination for every combination in the space
pub const ATTEMPTS_PER_COMBINATION: u64 = 100;
// Keeps pathological weight tables from spinning for minutes
/// Upper bound on attempts for a single combination
pub const MAX_SAMPLING_ATTEMPTS: u64 = 10_000_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

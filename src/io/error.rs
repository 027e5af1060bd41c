//! Error types for catalog loading, sampling, compositing and output writing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A category has no option that can ever be selected
    ///
    /// Occurs when the category directory holds no image files, or when
    /// every option in the category carries a zero weight.
    EmptyCategory {
        /// Label of the category
        category: &'static str,
    },

    /// More unique combinations were requested than the catalog can produce
    CombinationSpaceExhausted {
        /// Number of combinations requested (or already produced plus one)
        requested: u64,
        /// Number of distinct selectable combinations
        available: u64,
    },

    /// A weight was negative, NaN or infinite
    InvalidWeight {
        /// Label of the category owning the weight
        category: &'static str,
        /// Identifier of the option the weight belongs to
        option: String,
        /// Rejected weight value
        value: f64,
    },

    /// A weight table does not line up with its category's options
    WeightCountMismatch {
        /// Label of the category
        category: &'static str,
        /// Number of options in the category
        expected: usize,
        /// Number of weights supplied
        found: usize,
    },

    /// A weight configuration names an option the catalog does not contain
    UnknownOption {
        /// Label of the category
        category: &'static str,
        /// Identifier that could not be resolved
        option: String,
    },

    /// Failed to open or decode a layer image
    AssetLoad {
        /// Path to the layer image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A layer's dimensions differ from the background's
    AssetDimensionMismatch {
        /// Path to the offending layer
        path: PathBuf,
        /// Background dimensions (width, height)
        expected: (u32, u32),
        /// Layer dimensions (width, height)
        found: (u32, u32),
    },

    /// Failed to save a composed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to read or write a JSON document
    Json {
        /// Path of the document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl GenerationError {
    /// Whether the error stems from the run's configuration rather than its assets or output
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCategory { .. }
                | Self::CombinationSpaceExhausted { .. }
                | Self::InvalidWeight { .. }
                | Self::WeightCountMismatch { .. }
                | Self::UnknownOption { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the error stems from a missing, unreadable or mismatched layer asset
    pub const fn is_asset_error(&self) -> bool {
        matches!(
            self,
            Self::AssetLoad { .. } | Self::AssetDimensionMismatch { .. }
        )
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory { category } => {
                write!(f, "Category '{category}' has no selectable options")
            }
            Self::CombinationSpaceExhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Combination space exhausted: requested {requested} unique combinations but only {available} exist"
                )
            }
            Self::InvalidWeight {
                category,
                option,
                value,
            } => {
                write!(
                    f,
                    "Invalid weight {value} for option '{option}' in category '{category}': weights must be finite and non-negative"
                )
            }
            Self::WeightCountMismatch {
                category,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Category '{category}' has {expected} options but {found} weights were supplied"
                )
            }
            Self::UnknownOption { category, option } => {
                write!(f, "Category '{category}' has no option named '{option}'")
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load layer '{}': {source}", path.display())
            }
            Self::AssetDimensionMismatch {
                path,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Asset dimension mismatch for '{}': expected {}x{}, found {}x{}",
                    path.display(),
                    expected.0,
                    expected.1,
                    found.0,
                    found.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

//! Input/output operations, configuration and error handling

/// Command-line arguments and batch processing entry point
pub mod cli;
/// Default constants for layout, naming, weights and retries
pub mod configuration;
/// Error taxonomy for generation
pub mod error;
/// Layer image loading and PNG export
pub mod image;
/// Metadata records and JSON serialization
pub mod metadata;
/// Batch progress display
pub mod progress;
/// Weight configuration files
pub mod weights;

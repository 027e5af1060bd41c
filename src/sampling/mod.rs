//! Weighted, duplicate-free combination sampling

/// Unique combination sampler with bounded rejection
pub mod sampler;
/// Seeded weighted index selection
pub mod selector;
/// Per-category weight tables
pub mod weights;

pub use sampler::{Combination, CombinationSampler};
pub use weights::{WeightTable, WeightTables};

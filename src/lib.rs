//! Procedural generation of unique layered NFT images with JSON metadata
//!
//! Options are drawn per category from weighted pools, duplicate
//! combinations are rejected, the chosen layers are alpha-composited over a
//! background and a metadata document is written for every item.

#![forbid(unsafe_code)]

/// Layer categories, options and directory discovery
pub mod catalog;
/// Alpha compositing of stacked layers
pub mod compose;
/// Batch orchestration and output layout
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Weighted, duplicate-free combination sampling
pub mod sampling;

pub use io::error::{GenerationError, Result};

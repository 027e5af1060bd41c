//! Batch generation of NFT records

/// Batch driver, output layout and generated records
pub mod driver;

pub use driver::{BatchDriver, GenerationConfig, NftRecord, OutputLayout};

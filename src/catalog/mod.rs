//! Layer categories and the option catalog they are drawn from
//!
//! This module contains catalog-related functionality including:
//! - The four layer categories and their labels
//! - Named layer options backed by image files
//! - Directory discovery into an in-memory catalog

/// Directory discovery and the in-memory option catalog
pub mod inventory;

pub use inventory::{LayerCatalog, LayerOption};

/// One of the four layer categories every combination draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Character class, stacked directly above the background
    Class,
    /// Held or worn item, stacked above the class
    Item,
    /// Hidden trait, the topmost layer
    HiddenTrait,
    /// Background, the bottom layer
    Background,
}

impl Category {
    /// All categories in combination order
    pub const ALL: [Self; 4] = [Self::Class, Self::Item, Self::HiddenTrait, Self::Background];

    /// Attribute label used in metadata
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Item => "Item",
            Self::HiddenTrait => "Hidden Trait",
            Self::Background => "Background",
        }
    }

    /// Position of the category within [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Class => 0,
            Self::Item => 1,
            Self::HiddenTrait => 2,
            Self::Background => 3,
        }
    }
}

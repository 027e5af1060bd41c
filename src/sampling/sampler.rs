//! Unique weighted-combination sampling with bounded rejection

use crate::catalog::{Category, LayerCatalog, LayerOption};
use crate::io::configuration::{
    ATTEMPTS_PER_COMBINATION, MAX_SAMPLING_ATTEMPTS, MIN_SAMPLING_ATTEMPTS,
};
use crate::io::error::{GenerationError, Result};
use crate::sampling::selector::RandomSelector;
use crate::sampling::weights::WeightTables;
use std::collections::HashSet;

/// One option index per category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    /// Index into the class options
    pub class: usize,
    /// Index into the item options
    pub item: usize,
    /// Index into the hidden trait options
    pub hidden_trait: usize,
    /// Index into the background options
    pub background: usize,
}

impl Combination {
    /// Option index chosen for a category
    pub const fn index(&self, category: Category) -> usize {
        match category {
            Category::Class => self.class,
            Category::Item => self.item,
            Category::HiddenTrait => self.hidden_trait,
            Category::Background => self.background,
        }
    }

    /// Look up the chosen options in combination order
    ///
    /// # Errors
    ///
    /// Returns an error if any index is outside its category
    pub fn resolve<'a>(&self, catalog: &'a LayerCatalog) -> Result<[&'a LayerOption; 4]> {
        let lookup = |category: Category| {
            let index = self.index(category);
            catalog.option(category, index).ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "combination",
                    &index,
                    &format!("no {} option at this index", category.label()),
                )
            })
        };

        Ok([
            lookup(Category::Class)?,
            lookup(Category::Item)?,
            lookup(Category::HiddenTrait)?,
            lookup(Category::Background)?,
        ])
    }
}

/// Draws combinations never produced before in this batch
///
/// Every collision discards the whole candidate and redraws all four
/// categories, so accepted combinations follow the joint weighted
/// distribution conditioned on being new.
pub struct CombinationSampler {
    weights: WeightTables,
    selector: RandomSelector,
    generated: HashSet<Combination>,
    capacity: u64,
    max_attempts: u64,
}

impl CombinationSampler {
    /// Create a sampler over validated weight tables
    pub fn new(weights: WeightTables, seed: u64) -> Self {
        let capacity = weights.capacity();
        Self {
            weights,
            selector: RandomSelector::new(seed),
            generated: HashSet::new(),
            capacity,
            max_attempts: default_max_attempts(capacity),
        }
    }

    /// Override the number of full redraws allowed per combination
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Number of distinct combinations reachable with positive weights
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Redraws allowed per combination before giving up
    pub const fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Number of combinations accepted so far
    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }

    /// Whether a combination has already been accepted
    pub fn contains(&self, combination: &Combination) -> bool {
        self.generated.contains(combination)
    }

    /// Combinations still available
    pub fn remaining(&self) -> u64 {
        self.capacity
            .saturating_sub(self.generated.len() as u64)
    }

    /// Check that `count` more unique combinations can be produced
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::CombinationSpaceExhausted`] if `count`
    /// exceeds the remaining combination space
    pub fn ensure_capacity(&self, count: usize) -> Result<()> {
        let requested = (self.generated.len() as u64).saturating_add(count as u64);
        if requested > self.capacity {
            return Err(GenerationError::CombinationSpaceExhausted {
                requested,
                available: self.capacity,
            });
        }
        Ok(())
    }

    /// Draw one candidate, one weighted choice per category
    ///
    /// The candidate is not checked against or added to the generated set.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCategory`] if a category has no
    /// positive weight
    pub fn draw(&mut self) -> Result<Combination> {
        Ok(Combination {
            class: self.draw_index(Category::Class)?,
            item: self.draw_index(Category::Item)?,
            hidden_trait: self.draw_index(Category::HiddenTrait)?,
            background: self.draw_index(Category::Background)?,
        })
    }

    /// Draw until a combination not generated before is found, then record it
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::CombinationSpaceExhausted`] if every
    /// combination is taken or the attempt limit is reached
    pub fn next_unique(&mut self) -> Result<Combination> {
        self.ensure_capacity(1)?;

        for attempt in 1..=self.max_attempts {
            let candidate = self.draw()?;
            if self.generated.insert(candidate) {
                if attempt > 1 {
                    log::debug!(
                        "Accepted combination after {attempt} attempts ({} generated)",
                        self.generated.len()
                    );
                }
                return Ok(candidate);
            }
        }

        log::debug!(
            "Gave up after {} attempts with {} of {} combinations generated",
            self.max_attempts,
            self.generated.len(),
            self.capacity
        );
        Err(GenerationError::CombinationSpaceExhausted {
            requested: (self.generated.len() as u64).saturating_add(1),
            available: self.capacity,
        })
    }

    fn draw_index(&mut self, category: Category) -> Result<usize> {
        self.selector
            .weighted_choice(self.weights.table(category).weights())
            .ok_or(GenerationError::EmptyCategory {
                category: category.label(),
            })
    }
}

/// Attempt budget scaled to the size of the combination space
pub fn default_max_attempts(capacity: u64) -> u64 {
    capacity
        .saturating_mul(ATTEMPTS_PER_COMBINATION)
        .clamp(MIN_SAMPLING_ATTEMPTS, MAX_SAMPLING_ATTEMPTS)
}

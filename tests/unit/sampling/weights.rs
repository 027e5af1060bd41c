//! Tests for weight table validation and combination capacity

#[cfg(test)]
mod tests {
    use crate::small_catalog;
    use layered_nft::GenerationError;
    use layered_nft::catalog::Category;
    use layered_nft::sampling::weights::{WeightTable, WeightTables, default_weight};

    // Tests weight count must match the option count
    // Verified by zipping without a length check
    #[test]
    fn test_weight_count_mismatch() {
        let catalog = small_catalog();
        let err = WeightTable::new(&catalog, Category::Item, vec![1.0]).unwrap_err();

        assert!(matches!(
            err,
            GenerationError::WeightCountMismatch {
                category: "Item",
                expected: 2,
                found: 1
            }
        ));
    }

    // Tests negative and non-finite weights are rejected
    // Verified by only checking for negative values
    #[test]
    fn test_invalid_weights_rejected() {
        let catalog = small_catalog();

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = WeightTable::new(&catalog, Category::Class, vec![1.0, bad]).unwrap_err();
            match err {
                GenerationError::InvalidWeight { option, .. } => assert_eq!(option, "B"),
                other => unreachable!("Expected InvalidWeight, got {other}"),
            }
        }
    }

    // Tests a table of only zero weights leaves the category unusable
    // Verified by accepting all-zero tables
    #[test]
    fn test_all_zero_weights_rejected() {
        let catalog = small_catalog();
        let err = WeightTable::new(&catalog, Category::Background, vec![0.0, 0.0]).unwrap_err();

        assert!(err.is_configuration_error());
        assert!(matches!(err, GenerationError::EmptyCategory { .. }));
    }

    // Tests capacity ignores options that can never be drawn
    // Verified by counting every option regardless of weight
    #[test]
    fn test_capacity_counts_selectable_options() {
        let catalog = small_catalog();
        let tables = WeightTables::new(
            &catalog,
            [vec![1.0, 0.0], vec![1.0, 1.0], vec![2.0, 3.0], vec![0.5, 0.5]],
        )
        .unwrap();

        assert_eq!(tables.capacity(), 8);
        assert_eq!(tables.table(Category::Class).selectable_count(), 1);
        assert!((tables.table(Category::HiddenTrait).total() - 5.0).abs() < f64::EPSILON);
    }

    // Tests uniform and default tables fill every option
    // Verified by swapping item and class defaults
    #[test]
    fn test_uniform_and_default_tables() {
        let catalog = small_catalog();
        let uniform = WeightTables::uniform(&catalog);
        let defaults = WeightTables::flat_defaults(&catalog);

        assert_eq!(uniform.table(Category::Item).weights(), &[1.0, 1.0]);
        assert_eq!(uniform.capacity(), 16);
        for category in Category::ALL {
            let table = defaults.table(category);
            assert_eq!(table.len(), 2);
            assert!((table.weight(1) - default_weight(category)).abs() < f64::EPSILON);
        }
        assert!((default_weight(Category::Item) - 5.0).abs() < f64::EPSILON);
        assert!((default_weight(Category::Class) - 1.0).abs() < f64::EPSILON);
    }

    // Tests out-of-range lookups read as zero weight
    // Verified by indexing without bounds checking
    #[test]
    fn test_weight_out_of_range() {
        let table = WeightTable::flat(3, 2.0);

        assert!(table.weight(3).abs() < f64::EPSILON);
        assert!(!table.is_empty());
        assert!(WeightTable::flat(0, 1.0).is_empty());
    }
}

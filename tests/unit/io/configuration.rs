//! Tests for generation constants

#[cfg(test)]
mod tests {
    use layered_nft::io::configuration::{
        CLASSES_DIR, DEFAULT_COUNT, DEFAULT_SEED, HIDDEN_TRAITS_DIR, IMAGE_FILE_PREFIX,
        INDEX_WIDTH, ITEMS_DIR, MAX_SAMPLING_ATTEMPTS, MIN_SAMPLING_ATTEMPTS, NAME_PREFIX,
    };

    // Tests batch defaults
    // Verified by changing constant values
    #[test]
    fn test_batch_defaults() {
        assert_eq!(DEFAULT_COUNT, 1000);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests input directory names
    // Verified by renaming the hidden traits directory
    #[test]
    fn test_layer_directory_names() {
        assert_eq!(CLASSES_DIR, "classes");
        assert_eq!(ITEMS_DIR, "items");
        assert_eq!(HIDDEN_TRAITS_DIR, "hidden_traits");
    }

    // Tests naming constants
    // Verified by shortening the index width
    #[test]
    fn test_naming() {
        assert_eq!(INDEX_WIDTH, 4);
        assert_eq!(IMAGE_FILE_PREFIX, "NFT_");
        assert!(NAME_PREFIX.ends_with('#'));
    }

    // Tests attempt bounds are ordered
    // Verified by inverting relationship values
    #[test]
    fn test_attempt_bounds() {
        assert!(MIN_SAMPLING_ATTEMPTS < MAX_SAMPLING_ATTEMPTS);
    }
}

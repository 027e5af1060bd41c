//! Tests for metadata shaping and JSON serialization

#[cfg(test)]
mod tests {
    use layered_nft::GenerationError;
    use layered_nft::catalog::Category;
    use layered_nft::io::configuration::COLLECTION_DESCRIPTION;
    use layered_nft::io::metadata::{NftMetadata, padded_index, read_metadata, write_metadata};

    fn sample() -> NftMetadata {
        NftMetadata::new(
            7,
            "NFT_0007.png",
            &[
                (Category::Class, "Warrior.png"),
                (Category::Item, "Fire.Sword.png"),
                (Category::HiddenTrait, "Cursed.png"),
                (Category::Background, "Forest.png"),
            ],
        )
    }

    // Tests index padding
    // Verified by padding with spaces
    #[test]
    fn test_padded_index() {
        assert_eq!(padded_index(1), "0001");
        assert_eq!(padded_index(1000), "1000");
        assert_eq!(padded_index(12345), "12345");
    }

    // Tests record fields and extension stripping
    // Verified by keeping the file extension in attribute values
    #[test]
    fn test_new_metadata() {
        let metadata = sample();

        assert_eq!(metadata.name, "ROE #0007");
        assert_eq!(metadata.description, COLLECTION_DESCRIPTION);
        assert_eq!(metadata.image, "NFT_0007.png");
        assert_eq!(metadata.edition, 7);
        assert_eq!(metadata.attribute(Category::Class), Some("Warrior"));
        assert_eq!(metadata.attribute(Category::Item), Some("Fire.Sword"));
        assert_eq!(metadata.attribute(Category::HiddenTrait), Some("Cursed"));
        assert_eq!(metadata.attribute(Category::Background), Some("Forest"));
    }

    // Tests attribute order and JSON field names
    // Verified by renaming trait_type during serialization
    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        let attributes = value["attributes"].as_array().unwrap();
        let labels: Vec<&str> = attributes
            .iter()
            .map(|a| a["trait_type"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Class", "Item", "Hidden Trait", "Background"]);
        assert_eq!(attributes[0]["value"], "Warrior");
        assert_eq!(value["image"], "NFT_0007.png");
        assert_eq!(value["name"], "ROE #0007");
    }

    // Tests documents written to disk read back unchanged
    // Verified by truncating the writer before flushing
    #[test]
    fn test_write_and_read_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata/0007.json");

        write_metadata(&sample(), &path).unwrap();
        let loaded = read_metadata(&path).unwrap();

        assert_eq!(loaded, sample());
    }

    // Tests malformed documents report a JSON error
    // Verified by mapping parse failures to file system errors
    #[test]
    fn test_read_malformed_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0001.json");
        std::fs::write(&path, "{ \"name\": 1 }").unwrap();

        assert!(matches!(
            read_metadata(&path),
            Err(GenerationError::Json { .. })
        ));
    }
}

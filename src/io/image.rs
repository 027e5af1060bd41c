//! Layer image loading and PNG export

use crate::io::error::{GenerationError, Result, file_system_error};
use image::RgbaImage;
use std::path::Path;

/// Open a layer image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns [`GenerationError::AssetLoad`] if the file is missing,
/// unreadable or not a decodable image
pub fn load_layer(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| GenerationError::AssetLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("Loaded layer {}", path.display());
    Ok(img.to_rgba8())
}

/// Save an RGBA image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

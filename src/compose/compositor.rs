//! Alpha compositing of chosen layers into one flattened image

use crate::catalog::LayerOption;
use crate::io::error::{GenerationError, Result};
use crate::io::image::load_layer;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Check that a layer lines up pixel for pixel with the background
///
/// # Errors
///
/// Returns [`GenerationError::AssetDimensionMismatch`] if the sizes differ
pub fn ensure_dimensions(expected: (u32, u32), layer: &RgbaImage, path: &Path) -> Result<()> {
    let found = layer.dimensions();
    if found == expected {
        Ok(())
    } else {
        Err(GenerationError::AssetDimensionMismatch {
            path: path.to_path_buf(),
            expected,
            found,
        })
    }
}

/// Source-over for one straight-alpha pixel, rounding to nearest
///
/// An opaque destination stays opaque whatever the source alpha.
const fn source_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let [red, green, blue, alpha] = src;
    let [under_red, under_green, under_blue, under_alpha] = dst;
    let src_weight = alpha as u32 * 255;
    let dst_weight = under_alpha as u32 * (255 - alpha as u32);

    // Alpha scaled by 255
    let out_alpha = src_weight + dst_weight;
    if out_alpha == 0 {
        return [0, 0, 0, 0];
    }

    let weights = (src_weight, dst_weight, out_alpha);
    [
        blend_channel(red, under_red, weights),
        blend_channel(green, under_green, weights),
        blend_channel(blue, under_blue, weights),
        ((out_alpha + 127) / 255) as u8,
    ]
}

const fn blend_channel(src: u8, dst: u8, (src_weight, dst_weight, out_alpha): (u32, u32, u32)) -> u8 {
    ((src as u32 * src_weight + dst as u32 * dst_weight + out_alpha / 2) / out_alpha) as u8
}

/// Blend `layer` over `base` using per-pixel source-over alpha
///
/// Transparent regions of `layer` leave `base` visible and opaque regions of
/// `base` stay opaque.
///
/// # Errors
///
/// Returns [`GenerationError::AssetDimensionMismatch`] if the sizes differ
pub fn blend_layer(base: &mut RgbaImage, layer: &RgbaImage, path: &Path) -> Result<()> {
    ensure_dimensions(base.dimensions(), layer, path)?;
    for (dst, src) in base.pixels_mut().zip(layer.pixels()) {
        *dst = Rgba(source_over(dst.0, src.0));
    }
    Ok(())
}

/// Load and stack layers bottom first
///
/// The first option is the base and fixes the output dimensions; every
/// further layer is opened, blended and released in turn.
///
/// # Errors
///
/// Returns an error if:
/// - `stack` is empty
/// - Any layer cannot be loaded
/// - Any layer's dimensions differ from the base's
pub fn composite_stack(stack: &[&LayerOption]) -> Result<RgbaImage> {
    let Some((base, layers)) = stack.split_first() else {
        return Err(crate::io::error::invalid_parameter(
            "stack",
            &"[]",
            &"at least a background layer is required",
        ));
    };

    let mut canvas = load_layer(&base.path)?;
    for option in layers {
        let layer = load_layer(&option.path)?;
        blend_layer(&mut canvas, &layer, &option.path)?;
    }

    Ok(canvas)
}

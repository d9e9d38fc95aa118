use std::path::Path;

use ndarray::ArrayViewD;
use tracing::debug;

use super::save_image;
use crate::{
    colorize::{apply_colormap, depth_colorize, feature_colorize, normalize, to_intensity},
    colormap::JET,
    error::VisError,
    image::{to_array2, valid_crop, IntoLumaImage},
};

/// Writes the valid region of a depth map colorized with the jet ramp.
pub fn save_depth_colorized<P: AsRef<Path>>(
    depth: &ArrayViewD<f32>,
    path: P,
) -> Result<(), VisError> {
    let depth = to_array2(valid_crop(depth.view())?)?;
    save_image(&depth_colorize(&depth).view(), path)
}

/// Writes the valid region of a mask.
///
/// # Arguments
///
/// * `mask` - The mask tensor.
/// * `path` - The output image file.
/// * `colored` - Whether to apply the jet ramp, otherwise a single channel image is written.
/// * `normalized` - Whether the mask is already in [0, 1], otherwise it is min-max normalized.
pub fn save_mask_colorized<P: AsRef<Path>>(
    mask: &ArrayViewD<f32>,
    path: P,
    colored: bool,
    normalized: bool,
) -> Result<(), VisError> {
    let mask = to_array2(valid_crop(mask.view())?)?;
    let mask = if normalized {
        mask.to_owned()
    } else {
        normalize(&mask)
    };

    if colored {
        save_image(&apply_colormap(&mask.view(), &JET).view(), path)
    } else {
        let path = path.as_ref();
        debug!(path = %path.display(), dim = ?mask.dim(), "saving gray mask");
        to_intensity(&mask).to_luma_image()?.save(path)?;
        Ok(())
    }
}

/// Writes the valid region of a feature map colorized with the nipy spectral ramp.
pub fn save_feature_colorized<P: AsRef<Path>>(
    feature: &ArrayViewD<f32>,
    path: P,
) -> Result<(), VisError> {
    let feature = to_array2(valid_crop(feature.view())?)?;
    save_image(&feature_colorize(&feature).view(), path)
}

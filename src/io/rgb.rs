use std::path::Path;

use ndarray::{Array3, ArrayView3, ArrayViewD};
use tracing::debug;

use super::ensure_exists;
use crate::{
    error::VisError,
    image::{chw_to_hwc, first_sample, to_array3, valid_crop, IntoArray3, IntoImageRgb8},
};

/// Writes an `H x W x 3` RGB panel as an 8 bits color image. The encoder
/// is picked from the file extension.
pub fn save_image<P: AsRef<Path>>(panel: &ArrayView3<u8>, path: P) -> Result<(), VisError> {
    let path = path.as_ref();
    let (height, width, _) = panel.dim();
    debug!(path = %path.display(), height, width, "saving color image");
    panel.to_owned().into_image_rgb8()?.save(path)?;
    Ok(())
}

/// Writes the valid region of a `N x 3 x H x W` color tensor.
pub fn save_rgb_tensor<P: AsRef<Path>>(rgb: &ArrayViewD<f32>, path: P) -> Result<(), VisError> {
    let cropped = valid_crop(rgb.view())?;
    let chw = to_array3(first_sample(&cropped)?)?;
    let hwc = chw_to_hwc(chw).mapv(|v| v as u8);
    save_image(&hwc.view(), path)
}

/// Loads a color image as an `H x W x 3` array, without scaling.
pub fn read_rgb<P: AsRef<Path>>(path: P) -> Result<Array3<u8>, VisError> {
    let path = path.as_ref();
    ensure_exists(path)?;
    image::open(path)?.into_rgb8().into_array3()
}

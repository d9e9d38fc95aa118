use ndarray::{Array, Array2, Array3, ArrayBase, ArrayView2, Data, Dimension};
use tracing::warn;

use crate::colormap::{Colormap, JET, NIPY_SPECTRAL};

/// Min-max normalization into [0, 1].
///
/// Constant inputs are not guarded: `0 / 0` turns every element into NaN,
/// which the colorizers render as black. A single NaN input makes both
/// extremes NaN, so the whole map is NaN as well.
pub fn normalize<S, D>(values: &ArrayBase<S, D>) -> Array<f32, D>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            if v.is_nan() || min.is_nan() {
                (f32::NAN, f32::NAN)
            } else {
                (min.min(v), max.max(v))
            }
        });
    if min.is_nan() {
        warn!("normalizing a map with NaN values");
    } else if max <= min {
        warn!(min, max, "normalizing a constant map");
    }
    let range = max - min;
    values.mapv(|v| (v - min) / range)
}

/// Maps each value through the colormap lookup table, NaN becomes black.
pub fn apply_colormap(normalized: &ArrayView2<f32>, colormap: &Colormap) -> Array3<u8> {
    let lut = colormap.lut_u8();
    let (height, width) = normalized.dim();
    let mut rgb = Array3::<u8>::zeros((height, width, 3));
    for ((i, j), &value) in normalized.indexed_iter() {
        if let Some(index) = Colormap::index(value) {
            let [r, g, b] = lut[index];
            rgb[[i, j, 0]] = r;
            rgb[[i, j, 1]] = g;
            rgb[[i, j, 2]] = b;
        }
    }
    rgb
}

/// Scales values assumed in [0, 1] to 8 bit intensities.
pub fn to_intensity<D: Dimension>(normalized: &Array<f32, D>) -> Array<u8, D> {
    normalized.mapv(|v| (255.0 * v) as u8)
}

/// Colorizes a depth map with the jet ramp.
pub fn depth_colorize(depth: &ArrayView2<f32>) -> Array3<u8> {
    apply_colormap(&normalize(depth).view(), &JET)
}

/// Colorizes a feature map with the nipy spectral ramp.
pub fn feature_colorize(feature: &ArrayView2<f32>) -> Array3<u8> {
    apply_colormap(&normalize(feature).view(), &NIPY_SPECTRAL)
}

/// Single channel visualization of a mask, `min -> 0` and `max -> 255`.
pub fn mask_vis(mask: &ArrayView2<f32>) -> Array2<u8> {
    to_intensity(&normalize(mask))
}

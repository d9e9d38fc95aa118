use image::{flat::SampleLayout, RgbImage};
use ndarray::{Array3, ShapeBuilder};

use crate::error::VisError;

/// Trait to convert into ndarray::Array3, this is different than nshare version
/// because it uses the shape [height, width, channels] instead of [channels, height, width].
pub trait IntoArray3 {
    fn into_array3(self) -> Result<Array3<u8>, VisError>;
}

impl IntoArray3 for RgbImage {
    fn into_array3(self) -> Result<Array3<u8>, VisError> {
        let SampleLayout {
            channels,
            channel_stride,
            height,
            height_stride,
            width,
            width_stride,
        } = self.sample_layout();
        let shape = (height as usize, width as usize, channels as usize);
        let strides = (height_stride, width_stride, channel_stride);
        Ok(Array3::from_shape_vec(shape.strides(strides), self.into_raw())?)
    }
}

/// Trait to convert objects into image::RgbImage
pub trait IntoImageRgb8 {
    fn into_image_rgb8(self) -> Result<RgbImage, VisError>;
}

impl IntoImageRgb8 for Array3<u8> {
    fn into_image_rgb8(self) -> Result<RgbImage, VisError> {
        let (height, width, channels) = self.dim();
        if channels != 3 {
            return Err(VisError::invalid_parameter(format!(
                "Array3 must have 3 channels, got {channels}"
            )));
        }
        // Panels built from permuted views are not in standard layout.
        let raw = if self.is_standard_layout() {
            self.into_raw_vec()
        } else {
            self.iter().copied().collect()
        };
        RgbImage::from_raw(width as u32, height as u32, raw).ok_or_else(|| {
            VisError::invalid_parameter(format!("buffer does not fit a {width}x{height} image"))
        })
    }
}

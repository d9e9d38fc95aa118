use image::{GrayImage, ImageBuffer, Luma};
use ndarray::{Array2, Array3, ArrayView2};

use crate::error::VisError;

fn logical_raw<T: Copy>(array: &Array2<T>) -> Vec<T> {
    if array.is_standard_layout() {
        array.as_slice().map(<[T]>::to_vec).unwrap_or_default()
    } else {
        array.iter().copied().collect()
    }
}

/// Trait to convert an ndarray::Array* to an image::GrayImage
pub trait IntoLumaImage {
    fn to_luma_image(&self) -> Result<GrayImage, VisError>;
}

impl IntoLumaImage for Array2<u8> {
    fn to_luma_image(&self) -> Result<GrayImage, VisError> {
        let (height, width) = self.dim();
        GrayImage::from_vec(width as u32, height as u32, logical_raw(self)).ok_or_else(|| {
            VisError::invalid_parameter(format!("buffer does not fit a {width}x{height} image"))
        })
    }
}

/// Trait to convert an ndarray::Array2<u16> into a 16 bits luma image.
pub trait IntoImageLuma16 {
    fn to_image_luma16(&self) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>, VisError>;
}

impl IntoImageLuma16 for Array2<u16> {
    fn to_image_luma16(&self) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>, VisError> {
        let (height, width) = self.dim();
        ImageBuffer::from_vec(width as u32, height as u32, logical_raw(self)).ok_or_else(|| {
            VisError::invalid_parameter(format!("buffer does not fit a {width}x{height} image"))
        })
    }
}

/// Replicates a single channel image into the three RGB channels.
pub fn gray_to_rgb(gray: &ArrayView2<u8>) -> Array3<u8> {
    let (height, width) = gray.dim();
    Array3::from_shape_fn((height, width, 3), |(i, j, _)| gray[[i, j]])
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};
    use rstest::rstest;

    use super::{gray_to_rgb, IntoImageLuma16, IntoLumaImage};

    #[rstest]
    fn gray_to_rgb_replicates_channels() {
        let gray = array![[0u8, 10, 20], [30, 40, 50]];
        let rgb = gray_to_rgb(&gray.view());
        assert_eq!(rgb.dim(), (2, 3, 3));
        for c in 0..3 {
            assert_eq!(rgb[[1, 2, c]], 50);
            assert_eq!(rgb[[0, 1, c]], 10);
        }
    }

    #[rstest]
    fn luma_images_keep_values() {
        let luma8 = array![[1u8, 2], [3, 4], [5, 6]];
        let image = luma8.to_luma_image().unwrap();
        assert_eq!((image.width(), image.height()), (2, 3));
        assert_eq!(image.get_pixel(1, 2).0, [6]);

        let luma16 = Array2::from_shape_fn((2, 3), |(i, j)| (i * 1000 + j) as u16);
        let image = luma16.t().to_owned().to_image_luma16().unwrap();
        assert_eq!((image.width(), image.height()), (2, 3));
        assert_eq!(image.get_pixel(1, 2).0, [1002]);
    }
}

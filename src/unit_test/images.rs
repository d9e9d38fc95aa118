use ndarray::{Array2, Array3, ArrayD, IxDyn};
use rstest::fixture;

/// Strictly increasing 4x6 depth map, from 1 at the top left to 24 at the bottom right.
#[fixture]
pub fn ramp_depth() -> Array2<f32> {
    Array2::from_shape_fn((4, 6), |(i, j)| 1.0 + (i * 6 + j) as f32)
}

/// `1 x 1 x 4 x 5` depth tensor with values from 1 to 20.
#[fixture]
pub fn sample_depth_tensor() -> ArrayD<f32> {
    ArrayD::from_shape_fn(IxDyn(&[1, 1, 4, 5]), |idx| 1.0 + (idx[2] * 5 + idx[3]) as f32)
}

/// `1 x 3 x 4 x 5` color tensor with values in the 8 bits range.
#[fixture]
pub fn sample_rgb_tensor() -> ArrayD<f32> {
    ArrayD::from_shape_fn(IxDyn(&[1, 3, 4, 5]), |idx| {
        (3 + idx[1] * 60 + idx[2] * 10 + idx[3] * 2) as f32
    })
}

#[fixture]
pub fn sample_rgb_hwc() -> Array3<u8> {
    Array3::from_shape_fn((4, 5, 3), |(i, j, c)| (c * 80 + i * 12 + j * 3) as u8)
}

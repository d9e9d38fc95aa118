use ndarray::{ArrayView2, ArrayView3, ArrayViewD, Axis, Ix2, Ix3, Slice};

use crate::error::VisError;

/// Ratio between the kept rows and the width of a frame, tuned for the
/// field of view of a 1216 pixels wide sensor where only the bottom 256
/// rows carry valid depth.
pub const VALID_CROP_RATIO: f64 = 256.0 / 1216.0;

/// Removes every axis of length 1.
pub fn squeeze<A>(mut tensor: ArrayViewD<'_, A>) -> ArrayViewD<'_, A> {
    for axis in (0..tensor.ndim()).rev() {
        if tensor.len_of(Axis(axis)) == 1 {
            tensor = tensor.index_axis_move(Axis(axis), 0);
        }
    }
    tensor
}

/// Selects the first element along the batch axis.
pub fn first_sample<'a, A>(tensor: &ArrayViewD<'a, A>) -> Result<ArrayViewD<'a, A>, VisError> {
    if tensor.ndim() == 0 || tensor.len_of(Axis(0)) == 0 {
        return Err(VisError::invalid_parameter(format!(
            "tensor with shape {:?} has no sample",
            tensor.shape()
        )));
    }
    Ok(tensor.clone().index_axis_move(Axis(0), 0))
}

/// Squeezes the tensor and checks that it is a single scalar map.
pub fn to_array2<A>(tensor: ArrayViewD<'_, A>) -> Result<ArrayView2<'_, A>, VisError> {
    let shape = tensor.shape().to_vec();
    squeeze(tensor).into_dimensionality::<Ix2>().map_err(|_| {
        VisError::invalid_parameter(format!("expected a HxW map, got shape {shape:?}"))
    })
}

/// Squeezes the tensor and checks that it has three axes.
pub fn to_array3<A>(tensor: ArrayViewD<'_, A>) -> Result<ArrayView3<'_, A>, VisError> {
    let shape = tensor.shape().to_vec();
    squeeze(tensor).into_dimensionality::<Ix3>().map_err(|_| {
        VisError::invalid_parameter(format!("expected a CxHxW tensor, got shape {shape:?}"))
    })
}

/// Reorders a [channels, height, width] view into [height, width, channels].
pub fn chw_to_hwc<A>(chw: ArrayView3<'_, A>) -> ArrayView3<'_, A> {
    chw.permuted_axes([1, 2, 0])
}

/// Keeps the bottom `band = floor(ratio * width)` rows of the two last axes.
///
/// The start row is `height - band`, resolved like a negative slice start:
/// when the band is taller than the image the start wraps once, so
/// `band - height` rows are kept while `band < 2 * height`, and the whole
/// image is kept beyond that. A band of 0 rows gives an empty crop.
pub fn valid_crop_with_ratio<A>(
    tensor: ArrayViewD<'_, A>,
    ratio: f64,
) -> Result<ArrayViewD<'_, A>, VisError> {
    let ndim = tensor.ndim();
    if ndim < 2 {
        return Err(VisError::invalid_parameter(format!(
            "cannot crop a tensor with shape {:?}",
            tensor.shape()
        )));
    }

    let height = tensor.len_of(Axis(ndim - 2));
    let width = tensor.len_of(Axis(ndim - 1));
    let band = (ratio * width as f64) as usize;
    let start = if band <= height {
        height - band
    } else {
        (2 * height).saturating_sub(band)
    };

    let mut tensor = tensor;
    tensor.slice_axis_inplace(Axis(ndim - 2), Slice::from(start..));
    Ok(tensor)
}

pub fn valid_crop<A>(tensor: ArrayViewD<'_, A>) -> Result<ArrayViewD<'_, A>, VisError> {
    valid_crop_with_ratio(tensor, VALID_CROP_RATIO)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array, ArrayD, IxDyn};
    use rstest::rstest;

    use super::{chw_to_hwc, first_sample, squeeze, to_array2, to_array3, valid_crop};

    fn iota(shape: &[usize]) -> ArrayD<f32> {
        let len = shape.iter().product::<usize>();
        Array::from_shape_vec(IxDyn(shape), (0..len).map(|v| v as f32).collect()).unwrap()
    }

    #[rstest]
    fn squeeze_removes_singleton_axes() {
        let tensor = iota(&[1, 1, 4, 1, 6]);
        assert_eq!(squeeze(tensor.view()).shape(), &[4, 6]);

        let tensor = iota(&[3, 4]);
        assert_eq!(squeeze(tensor.view()).shape(), &[3, 4]);
    }

    #[rstest]
    fn first_sample_drops_batch_axis() {
        let tensor = iota(&[2, 3, 4]);
        let sample = first_sample(&tensor.view()).unwrap();
        assert_eq!(sample.shape(), &[3, 4]);
        assert_eq!(sample[[2, 3]], 11.0);

        assert!(first_sample(&iota(&[0, 3]).view()).is_err());
    }

    #[rstest]
    fn to_arrays_check_rank() {
        let depth = iota(&[1, 1, 4, 5]);
        assert_eq!(to_array2(depth.view()).unwrap().dim(), (4, 5));
        assert!(to_array3(depth.view()).is_err());

        let rgb = iota(&[1, 3, 4, 5]);
        assert_eq!(to_array3(rgb.view()).unwrap().dim(), (3, 4, 5));
        assert!(to_array2(rgb.view()).is_err());
    }

    #[rstest]
    fn chw_to_hwc_moves_channels_last() {
        let chw = iota(&[3, 2, 4]);
        let chw = chw.view().into_dimensionality().unwrap();
        let hwc = chw_to_hwc(chw);
        assert_eq!(hwc.dim(), (2, 4, 3));
        assert_eq!(hwc[[1, 2, 2]], chw[[2, 1, 2]]);
    }

    #[rstest]
    #[case(&[1, 1, 352, 1216], 256)]
    #[case(&[1, 3, 300, 608], 128)]
    #[case(&[1, 1, 400, 640], 134)]
    #[case(&[1, 1, 200, 1216], 56)]
    #[case(&[1, 1, 256, 1216], 256)]
    #[case(&[10, 1216], 10)]
    fn valid_crop_keeps_bottom_rows(#[case] shape: &[usize], #[case] expected_rows: usize) {
        let tensor = iota(shape);
        let cropped = valid_crop(tensor.view()).unwrap();
        let ndim = shape.len();
        assert_eq!(cropped.shape()[ndim - 2], expected_rows);
        assert_eq!(cropped.shape()[ndim - 1], shape[ndim - 1]);
        assert_eq!(cropped.iter().last().copied(), tensor.iter().last().copied());
    }

    #[rstest]
    fn valid_crop_of_narrow_images_is_empty() {
        let tensor = iota(&[6, 4]);
        let cropped = valid_crop(tensor.view()).unwrap();
        assert_eq!(cropped.shape(), &[0, 4]);
        assert!(valid_crop(iota(&[5]).view()).is_err());
    }
}

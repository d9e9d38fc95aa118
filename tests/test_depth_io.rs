use approx::assert_abs_diff_eq;
use depthviz::{
    io::{
        read_depth, read_rgb, save_depth_float_tiff, save_depth_uint16, save_depth_uint16_exact,
    },
    VisError,
};
use ndarray::{Array, Axis, IxDyn};
use ndarray_rand::{rand_distr::Uniform, RandomExt};
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case("generic.png", false)]
#[case("upload.png", true)]
fn should_recover_png_depth_within_quantization(#[case] name: &str, #[case] exact: bool) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    let mut depth = Array::random(IxDyn(&[1, 1, 24, 32]), Uniform::new(0.0f32, 80.0));
    depth[[0, 0, 0, 0]] = 80.0;

    if exact {
        save_depth_uint16_exact(&depth.view(), &path).unwrap();
    } else {
        save_depth_uint16(&depth.view(), &path).unwrap();
    }

    let read = read_depth(&path).unwrap();
    assert_eq!(read.dim(), (24, 32, 1));
    let read = read.index_axis(Axis(2), 0);
    for (recovered, original) in read.iter().zip(depth.iter()) {
        assert_abs_diff_eq!(recovered, original, epsilon = 1.0 / 256.0);
    }
}

#[rstest]
fn should_round_trip_float_tiff_exactly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("depth.tiff");
    let depth = Array::random(IxDyn(&[1, 1, 24, 32]), Uniform::new(0.0f32, 80.0));
    save_depth_float_tiff(&depth.view(), &path).unwrap();

    let read = read_depth(&path).unwrap();
    let read = read.index_axis(Axis(2), 0);
    assert!(read
        .iter()
        .zip(depth.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[rstest]
fn should_fail_before_opening_missing_files() {
    let dir = TempDir::new().unwrap();
    for name in ["depth.png", "depth.tiff", "depth.jpg"] {
        let path = dir.path().join(name);
        assert!(matches!(read_depth(&path), Err(VisError::FileNotFound(_))));
        assert!(matches!(read_rgb(&path), Err(VisError::FileNotFound(_))));
    }
}

#[rstest]
#[case("depth.jpg")]
#[case("depth.PNG")]
#[case("depth.tif")]
#[case("depth")]
fn should_reject_unknown_extensions(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, [0u8; 16]).unwrap();
    assert!(matches!(read_depth(&path), Err(VisError::UnsupportedFormat(_))));
}

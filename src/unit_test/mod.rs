mod images;
pub(crate) use images::{ramp_depth, sample_depth_tensor, sample_rgb_hwc, sample_rgb_tensor};

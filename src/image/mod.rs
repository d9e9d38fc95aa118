mod rgb;
pub use rgb::{IntoArray3, IntoImageRgb8};

mod luma;
pub use luma::{gray_to_rgb, IntoImageLuma16, IntoLumaImage};

mod tensor;
pub use tensor::{
    chw_to_hwc, first_sample, squeeze, to_array2, to_array3, valid_crop, valid_crop_with_ratio,
    VALID_CROP_RATIO,
};

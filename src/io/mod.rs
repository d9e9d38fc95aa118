use std::path::Path;

use crate::error::VisError;

mod codec;
pub use codec::{decode_depth_u16, encode_depth_u16, DEPTH_SCALE};
mod rgb;
pub use rgb::{read_rgb, save_image, save_rgb_tensor};
mod depth;
pub use depth::{read_depth, save_depth_float_tiff, save_depth_uint16, save_depth_uint16_exact};
mod colorized;
pub use colorized::{save_depth_colorized, save_feature_colorized, save_mask_colorized};

/// Fails with `FileNotFound` before any attempt to open `path`.
pub(crate) fn ensure_exists(path: &Path) -> Result<(), VisError> {
    if path.exists() {
        Ok(())
    } else {
        Err(VisError::FileNotFound(path.to_path_buf()))
    }
}

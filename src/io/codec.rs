use ndarray::{Array2, ArrayView2};

/// Fixed point scale of 16 bits depth files: one unit is 1/256 of a meter.
pub const DEPTH_SCALE: f32 = 256.0;

/// Converts metric depth to 16 bits fixed point. Values are truncated
/// toward zero, negative and NaN depths become 0 and values above the
/// range saturate at `u16::MAX`.
pub fn encode_depth_u16(depth: &ArrayView2<f32>) -> Array2<u16> {
    depth.mapv(|v| (v * DEPTH_SCALE) as u16)
}

pub fn decode_depth_u16(raw: &ArrayView2<u16>) -> Array2<f32> {
    raw.mapv(|v| v as f32 / DEPTH_SCALE)
}

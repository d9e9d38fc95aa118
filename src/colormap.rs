use std::sync::OnceLock;

/// Number of entries of the sampled lookup table of every colormap.
pub const COLORMAP_LUT_SIZE: usize = 256;

/// Piecewise linear color ramp, described by `(x, y)` anchors per channel.
///
/// Anchors of each channel must start at `x = 0.0`, end at `x = 1.0`
/// and be strictly increasing.
#[derive(Debug)]
pub struct Colormap {
    pub name: &'static str,
    red: &'static [(f64, f64)],
    green: &'static [(f64, f64)],
    blue: &'static [(f64, f64)],
    lut: OnceLock<[[u8; 3]; COLORMAP_LUT_SIZE]>,
}

/// Ramp used for depth maps and colored masks.
pub static JET: Colormap = Colormap {
    name: "jet",
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
    lut: OnceLock::new(),
};

/// Ramp used for feature maps.
pub static NIPY_SPECTRAL: Colormap = Colormap {
    name: "nipy_spectral",
    red: &[
        (0.0, 0.0),
        (0.05, 0.4667),
        (0.10, 0.5333),
        (0.15, 0.0),
        (0.20, 0.0),
        (0.25, 0.0),
        (0.30, 0.0),
        (0.35, 0.0),
        (0.40, 0.0),
        (0.45, 0.0),
        (0.50, 0.0),
        (0.55, 0.0),
        (0.60, 0.0),
        (0.65, 0.7333),
        (0.70, 0.9333),
        (0.75, 1.0),
        (0.80, 1.0),
        (0.85, 1.0),
        (0.90, 0.8667),
        (0.95, 0.80),
        (1.0, 0.80),
    ],
    green: &[
        (0.0, 0.0),
        (0.05, 0.0),
        (0.10, 0.0),
        (0.15, 0.0),
        (0.20, 0.0),
        (0.25, 0.4667),
        (0.30, 0.6000),
        (0.35, 0.6667),
        (0.40, 0.6667),
        (0.45, 0.6000),
        (0.50, 0.7333),
        (0.55, 0.8667),
        (0.60, 1.0),
        (0.65, 1.0),
        (0.70, 0.9333),
        (0.75, 0.8000),
        (0.80, 0.6000),
        (0.85, 0.0),
        (0.90, 0.0),
        (0.95, 0.0),
        (1.0, 0.80),
    ],
    blue: &[
        (0.0, 0.0),
        (0.05, 0.5333),
        (0.10, 0.6000),
        (0.15, 0.6667),
        (0.20, 0.8667),
        (0.25, 0.8667),
        (0.30, 0.8667),
        (0.35, 0.6667),
        (0.40, 0.5333),
        (0.45, 0.0),
        (0.5, 0.0),
        (0.55, 0.0),
        (0.60, 0.0),
        (0.65, 0.0),
        (0.70, 0.0),
        (0.75, 0.0),
        (0.80, 0.0),
        (0.85, 0.0),
        (0.90, 0.0),
        (0.95, 0.0),
        (1.0, 0.80),
    ],
    lut: OnceLock::new(),
};

fn sample_channel(anchors: &[(f64, f64)], x: f64) -> f64 {
    let (x0, y0) = anchors[0];
    if x <= x0 {
        return y0;
    }

    for window in anchors.windows(2) {
        let (xa, ya) = window[0];
        let (xb, yb) = window[1];
        if x <= xb {
            let distance = (x - xa) / (xb - xa);
            return num::clamp(distance * (yb - ya) + ya, 0.0, 1.0);
        }
    }

    anchors[anchors.len() - 1].1
}

impl Colormap {
    /// Color of the ramp at `x` in [0, 1], as floating point RGB in [0, 1].
    pub fn sample(&self, x: f64) -> [f64; 3] {
        [
            sample_channel(self.red, x),
            sample_channel(self.green, x),
            sample_channel(self.blue, x),
        ]
    }

    /// The lookup table scaled to 8 bits, entry `i` is the ramp at `i / 255`.
    /// Built on first use and shared afterwards.
    pub fn lut_u8(&self) -> &[[u8; 3]; COLORMAP_LUT_SIZE] {
        self.lut.get_or_init(|| self.build_lut())
    }

    fn build_lut(&self) -> [[u8; 3]; COLORMAP_LUT_SIZE] {
        let mut lut = [[0u8; 3]; COLORMAP_LUT_SIZE];
        let last = (COLORMAP_LUT_SIZE - 1) as f64;
        for (i, entry) in lut.iter_mut().enumerate() {
            let [r, g, b] = self.sample(i as f64 / last);
            *entry = [(255.0 * r) as u8, (255.0 * g) as u8, (255.0 * b) as u8];
        }
        lut
    }

    /// Maps a normalized value to its lookup table entry.
    ///
    /// Values below 0 use the first entry and values above 1 the last one.
    /// NaN has no entry.
    pub fn index(value: f32) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let scaled = value * COLORMAP_LUT_SIZE as f32;
        if scaled < 0.0 {
            Some(0)
        } else {
            Some((scaled as usize).min(COLORMAP_LUT_SIZE - 1))
        }
    }
}

use ndarray::{concatenate, Array3, ArrayD, ArrayView3, ArrayViewD, Axis};

use crate::{
    colorize::{depth_colorize, mask_vis},
    error::VisError,
    image::{chw_to_hwc, first_sample, gray_to_rgb, to_array2, to_array3},
};

/// Optional visual inputs of one sample. Every tensor is batched, only its
/// first sample is drawn.
#[derive(Debug, Default, Clone)]
pub struct ElementBag {
    /// `N x 3 x H x W` color image.
    pub rgb: Option<ArrayD<f32>>,
    /// `N x 1 x H x W` grayscale image, used when there is no color image.
    pub gray: Option<ArrayD<f32>>,
    /// `N x 1 x H x W` sparse depth input.
    pub depth: Option<ArrayD<f32>>,
    /// `N x 1 x H x W` ground truth depth.
    pub ground_truth: Option<ArrayD<f32>>,
}

impl ElementBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from `rgb`, `g`, `d` and `gt` named tensors. Other names are ignored.
    pub fn from_named<I, K>(elements: I) -> Self
    where
        I: IntoIterator<Item = (K, ArrayD<f32>)>,
        K: AsRef<str>,
    {
        let mut bag = Self::default();
        for (key, tensor) in elements {
            match key.as_ref() {
                "rgb" => bag.rgb = Some(tensor),
                "g" => bag.gray = Some(tensor),
                "d" => bag.depth = Some(tensor),
                "gt" => bag.ground_truth = Some(tensor),
                _ => (),
            }
        }
        bag
    }

    pub fn with_rgb(mut self, rgb: ArrayD<f32>) -> Self {
        self.rgb = Some(rgb);
        self
    }

    pub fn with_gray(mut self, gray: ArrayD<f32>) -> Self {
        self.gray = Some(gray);
        self
    }

    pub fn with_depth(mut self, depth: ArrayD<f32>) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_ground_truth(mut self, ground_truth: ArrayD<f32>) -> Self {
        self.ground_truth = Some(ground_truth);
        self
    }
}

/// Extra network outputs appended to a row.
#[derive(Debug, Default, Clone)]
pub struct RowExtras<'a> {
    pub predicted_rgb: Option<ArrayViewD<'a, f32>>,
    pub predicted_mask: Option<ArrayViewD<'a, f32>>,
    pub extra: Option<ArrayViewD<'a, f32>>,
    pub extra2: Option<ArrayViewD<'a, f32>>,
    pub extra_rgb: Option<ArrayViewD<'a, f32>>,
}

fn rgb_panel(rgb: &ArrayViewD<f32>) -> Result<Array3<u8>, VisError> {
    let chw = to_array3(first_sample(rgb)?)?;
    Ok(chw_to_hwc(chw).mapv(|v| v as u8))
}

fn gray_panel(gray: &ArrayViewD<f32>) -> Result<Array3<u8>, VisError> {
    let gray = to_array2(first_sample(gray)?)?.mapv(|v| v as u8);
    Ok(gray_to_rgb(&gray.view()))
}

fn depth_panel(depth: &ArrayViewD<f32>) -> Result<Array3<u8>, VisError> {
    Ok(depth_colorize(&to_array2(first_sample(depth)?)?))
}

fn mask_panel(mask: &ArrayViewD<f32>) -> Result<Array3<u8>, VisError> {
    let mask = mask_vis(&to_array2(first_sample(mask)?)?);
    Ok(gray_to_rgb(&mask.view()))
}

/// Composes one comparison row, left to right:
/// color (or grayscale) input, depth input and prediction, `extra_rgb`,
/// the input color again when `predicted_rgb` is set, the masks
/// `predicted_mask`, `extra`, `extra2`, and finally the ground truth.
///
/// `predicted_rgb` only acts as a switch: its pixels are never drawn, the
/// color input of the bag is repeated instead.
///
/// # Arguments
///
/// * `elements` - The sample inputs.
/// * `prediction` - The `N x 1 x H x W` predicted depth, drawn only when the bag has depth.
/// * `extras` - The optional network outputs.
///
/// # Returns
///
/// The `H x W' x 3` panel, where `W'` is the sum of the drawn widths. All
/// drawn elements must share the same height.
pub fn compose_row(
    elements: &ElementBag,
    prediction: &ArrayViewD<f32>,
    extras: &RowExtras,
) -> Result<Array3<u8>, VisError> {
    let mut row = Vec::new();
    if let Some(rgb) = &elements.rgb {
        row.push(rgb_panel(&rgb.view())?);
    } else if let Some(gray) = &elements.gray {
        row.push(gray_panel(&gray.view())?);
    }

    if let Some(depth) = &elements.depth {
        row.push(depth_panel(&depth.view())?);
        row.push(depth_panel(prediction)?);
    }

    if let Some(extra_rgb) = &extras.extra_rgb {
        row.push(depth_panel(extra_rgb)?);
    }

    if extras.predicted_rgb.is_some() {
        let rgb = elements.rgb.as_ref().ok_or_else(|| {
            VisError::malformed("predicted_rgb is drawn from the rgb element, which is missing")
        })?;
        row.push(rgb_panel(&rgb.view())?);
    }

    for mask in [&extras.predicted_mask, &extras.extra, &extras.extra2]
        .into_iter()
        .flatten()
    {
        row.push(mask_panel(mask)?);
    }

    if let Some(ground_truth) = &elements.ground_truth {
        row.push(depth_panel(&ground_truth.view())?);
    }

    if row.is_empty() {
        return Err(VisError::invalid_parameter("nothing to compose in the row"));
    }
    let views = row.iter().map(|panel| panel.view()).collect::<Vec<_>>();
    Ok(concatenate(Axis(1), &views)?)
}

/// Stacks `row` under `panel`. Both must have the same width.
pub fn stack_rows(panel: &ArrayView3<u8>, row: &ArrayView3<u8>) -> Result<Array3<u8>, VisError> {
    Ok(concatenate(Axis(0), &[panel.view(), row.view()])?)
}

//! Visualization and serialization helpers for depth estimation pipelines:
//! colorized depth, feature and mask maps, comparison panels, and depth
//! files in 16 bits PNG or float TIFF.

pub mod colorize;
pub mod colormap;
pub mod error;
pub mod image;
pub mod io;
pub mod panel;

#[cfg(test)]
mod unit_test;

pub use crate::colorize::{depth_colorize, feature_colorize, mask_vis};
pub use crate::error::VisError;
pub use crate::panel::{compose_row, stack_rows, ElementBag, RowExtras};

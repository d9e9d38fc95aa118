use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use image::DynamicImage;
use ndarray::{Array2, Array3, ArrayViewD, Axis};
use nshare::ToNdarray2;
use tiff::{
    decoder::{Decoder, DecodingResult},
    encoder::{colortype::Gray32Float, TiffEncoder},
    ColorType,
};
use tracing::debug;

use super::{decode_depth_u16, encode_depth_u16, ensure_exists};
use crate::{error::VisError, image::to_array2, image::IntoImageLuma16};

/// Writes depth as a 16 bits grayscale image through the `image` encoders.
pub fn save_depth_uint16<P: AsRef<Path>>(depth: &ArrayViewD<f32>, path: P) -> Result<(), VisError> {
    let path = path.as_ref();
    let raw = encode_depth_u16(&to_array2(depth.view())?);
    debug!(path = %path.display(), dim = ?raw.dim(), "saving 16 bits depth");
    raw.to_image_luma16()?.save(path)?;
    Ok(())
}

/// Writes depth as a 16 bits grayscale PNG, byte by byte.
///
/// The samples are serialized by hand in the big endian order of the PNG
/// format, without any color management chunk, so benchmark servers read
/// back the exact fixed point values.
pub fn save_depth_uint16_exact<P: AsRef<Path>>(
    depth: &ArrayViewD<f32>,
    path: P,
) -> Result<(), VisError> {
    let path = path.as_ref();
    let raw = encode_depth_u16(&to_array2(depth.view())?);
    let (height, width) = raw.dim();
    debug!(path = %path.display(), height, width, "saving upload 16 bits depth");

    let bytes = raw.iter().flat_map(|v| v.to_be_bytes()).collect::<Vec<u8>>();

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Sixteen);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&bytes)?;
    writer.finish()?;
    Ok(())
}

/// Writes depth as a single channel 32 bits float TIFF, without scaling.
pub fn save_depth_float_tiff<P: AsRef<Path>>(
    depth: &ArrayViewD<f32>,
    path: P,
) -> Result<(), VisError> {
    let path = path.as_ref();
    let depth = to_array2(depth.view())?;
    let (height, width) = depth.dim();
    debug!(path = %path.display(), height, width, "saving float depth");

    let samples = depth.iter().copied().collect::<Vec<f32>>();
    let mut encoder = TiffEncoder::new(BufWriter::new(File::create(path)?))?;
    encoder.write_image::<Gray32Float>(width as u32, height as u32, &samples)?;
    Ok(())
}

fn read_tiff_depth(path: &Path) -> Result<Array2<f32>, VisError> {
    let mut decoder = Decoder::new(BufReader::new(File::open(path)?))?;
    if !matches!(decoder.colortype()?, ColorType::Gray(_)) {
        return Err(VisError::malformed(format!(
            "{}: TIFF depth maps must have a single channel",
            path.display()
        )));
    }

    let (width, height) = decoder.dimensions()?;
    let samples = match decoder.read_image()? {
        DecodingResult::F32(samples) => samples,
        DecodingResult::F64(samples) => samples.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U8(samples) => samples.into_iter().map(f32::from).collect(),
        DecodingResult::U16(samples) => samples.into_iter().map(f32::from).collect(),
        DecodingResult::U32(samples) => samples.into_iter().map(|v| v as f32).collect(),
        _ => {
            return Err(VisError::malformed(format!(
                "{}: unsupported TIFF sample type",
                path.display()
            )))
        }
    };
    Ok(Array2::from_shape_vec((height as usize, width as usize), samples)?)
}

fn read_png_depth(path: &Path) -> Result<Array2<f32>, VisError> {
    let raw = match image::open(path)? {
        DynamicImage::ImageLuma16(buffer) => buffer.into_ndarray2(),
        DynamicImage::ImageLuma8(buffer) => buffer.into_ndarray2().mapv(u16::from),
        other => {
            return Err(VisError::malformed(format!(
                "{}: PNG depth maps must be grayscale, found {:?}",
                path.display(),
                other.color()
            )))
        }
    };

    let max = raw.iter().copied().max().unwrap_or(0);
    if max <= 255 {
        return Err(VisError::malformed(format!(
            "{}: depths in PNG depth map should be encoded using 16 bits",
            path.display()
        )));
    }
    Ok(decode_depth_u16(&raw.view()))
}

/// Loads a depth map in meters as a `H x W x 1` array.
///
/// Supported formats:
/// * `.png` - 16 bits fixed point, see [`super::DEPTH_SCALE`]. Files whose
///   maximum value fits in 8 bits are rejected.
/// * `.tiff` - float values, returned as they are.
pub fn read_depth<P: AsRef<Path>>(path: P) -> Result<Array3<f32>, VisError> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let depth = match extension {
        "png" => read_png_depth(path)?,
        "tiff" => read_tiff_depth(path)?,
        _ => return Err(VisError::UnsupportedFormat(format!(".{extension}"))),
    };
    debug!(path = %path.display(), extension, dim = ?depth.dim(), "read depth");

    Ok(depth.insert_axis(Axis(2)))
}

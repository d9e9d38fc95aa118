use std::path::PathBuf;

/// Main error type for the library.
#[derive(Debug)]
pub enum VisError {
    /// The input file does not exist. Checked before any open attempt.
    FileNotFound(PathBuf),
    /// The file extension is not one of the supported depth encodings.
    UnsupportedFormat(String),
    /// The file or array content does not match what the operation expects.
    MalformedInput(String),
    /// Used when the user pass a logical invalid parameter to a function.
    InvalidParameter(String),
    Shape(ndarray::ShapeError),
    Io(std::io::Error),
    Image(image::ImageError),
    Tiff(tiff::TiffError),
    Png(png::EncodingError),
}

impl std::fmt::Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VisError::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            VisError::UnsupportedFormat(ext) => write!(f, "Unsupported format: {ext}"),
            VisError::MalformedInput(err) => write!(f, "Malformed input: {err}"),
            VisError::InvalidParameter(err) => write!(f, "Parameter error: {err}"),
            VisError::Shape(err) => write!(f, "Shape error: {err}"),
            VisError::Io(err) => write!(f, "IO error: {err}"),
            VisError::Image(err) => write!(f, "Image error: {err}"),
            VisError::Tiff(err) => write!(f, "TIFF error: {err}"),
            VisError::Png(err) => write!(f, "PNG error: {err}"),
        }
    }
}

impl VisError {
    /// Create a error with the kind `InvalidParameter`.
    /// # Arguments
    /// * `msg` - The error message.
    pub fn invalid_parameter<T: ToString>(msg: T) -> Self {
        VisError::InvalidParameter(msg.to_string())
    }

    pub fn malformed<T: ToString>(msg: T) -> Self {
        VisError::MalformedInput(msg.to_string())
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisError::Shape(err) => Some(err),
            VisError::Io(err) => Some(err),
            VisError::Image(err) => Some(err),
            VisError::Tiff(err) => Some(err),
            VisError::Png(err) => Some(err),
            VisError::FileNotFound(_)
            | VisError::UnsupportedFormat(_)
            | VisError::MalformedInput(_)
            | VisError::InvalidParameter(_) => None,
        }
    }
}

impl From<std::io::Error> for VisError {
    fn from(err: std::io::Error) -> Self {
        VisError::Io(err)
    }
}

impl From<ndarray::ShapeError> for VisError {
    fn from(err: ndarray::ShapeError) -> Self {
        VisError::Shape(err)
    }
}

impl From<image::ImageError> for VisError {
    fn from(err: image::ImageError) -> Self {
        VisError::Image(err)
    }
}

impl From<tiff::TiffError> for VisError {
    fn from(err: tiff::TiffError) -> Self {
        VisError::Tiff(err)
    }
}

impl From<png::EncodingError> for VisError {
    fn from(err: png::EncodingError) -> Self {
        VisError::Png(err)
    }
}

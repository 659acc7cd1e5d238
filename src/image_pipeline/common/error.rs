use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmpError {
    #[error("Pixel (row={row}, col={col}) is out of bounds for a {height}x{width} raster")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to create output file: {0}")]
    OutputCreateError(String),

    #[error("Failed to write {section}: {source}")]
    WriteError {
        section: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BmpError {
    pub(crate) fn write(section: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| BmpError::WriteError { section, source }
    }
}

pub type Result<T> = std::result::Result<T, BmpError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported operation ({converter}): {operation} is not supported")]
    UnsupportedOperation {
        converter: &'static str,
        operation: &'static str,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image data too small: expected at least {expected} bytes, got {actual}")]
    ImageDataTooSmall { expected: usize, actual: usize },

    #[error("Conversion error ({format}): {message}")]
    Conversion {
        format: &'static str,
        message: String,
    },

    #[error("Feature not enabled: {0}. Recompile with --features {0}")]
    FeatureDisabled(String),
}

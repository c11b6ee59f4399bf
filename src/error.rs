use alloc::string::String;
use enough::StopReason;

/// Errors from pattern generation, encoding, decoding, and file output.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TestcardError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TestcardError {
    fn from(r: StopReason) -> Self {
        TestcardError::Cancelled(r)
    }
}

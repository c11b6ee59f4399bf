use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;
use crate::limits::Limits;
use crate::ppm;

/// Decode a raster file's bytes into a fresh buffer, selecting the decoder
/// by magic bytes. Today the only decodable input is binary PPM (P6).
pub fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<PixelBuffer, TestcardError> {
    decode_with(data, limits, &stop)
}

pub(crate) fn decode_with(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TestcardError> {
    if data.starts_with(b"P6") {
        return ppm::decode_with(data, limits, stop);
    }
    Err(TestcardError::UnrecognizedFormat)
}

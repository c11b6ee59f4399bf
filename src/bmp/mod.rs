//! BMP encoder: 24-bit uncompressed BITMAPINFOHEADER bitmaps.

mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

/// Encode to a 24-bit uncompressed BMP.
///
/// Rows are written bottom-up in BGR byte order, zero-padded to a 4-byte
/// stride, per the Windows bitmap convention.
pub fn encode(buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_bmp(buffer, &stop)
}

pub(crate) fn encode_with(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_bmp(buffer, stop)
}

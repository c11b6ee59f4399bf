//! PNG encoder: minimal valid 8-bit truecolor PNG.
//!
//! Three chunks (IHDR, IDAT, IEND), filter type 0 on every scanline, and a
//! zlib stream built from stored-mode deflate blocks. Checksums (CRC-32,
//! Adler-32) are computed here rather than pulled in; they are the
//! format-defining part of the container.

mod crc;
mod encode;
mod zlib;

use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

/// Encode to PNG (color type 2, bit depth 8, no interlace).
pub fn encode(buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_png(buffer, &stop)
}

pub(crate) fn encode_with(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_png(buffer, stop)
}

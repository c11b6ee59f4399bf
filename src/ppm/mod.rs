//! PPM codec: P3 (ASCII) and P6 (binary) encode, P6 decode.
//!
//! P3 decode is deliberately absent — nothing feeds ASCII PPM back in.

mod decode;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;
use crate::limits::Limits;

/// Encode to ASCII PPM (P3).
pub fn encode_ascii(buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_p3(buffer, &stop)
}

/// Encode to binary PPM (P6).
pub fn encode_binary(buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, TestcardError> {
    encode::encode_p6(buffer, &stop)
}

/// Decode a binary PPM (P6, maxval 255) into a fresh buffer.
pub fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<PixelBuffer, TestcardError> {
    decode::decode_p6(data, limits, &stop)
}

pub(crate) fn encode_ascii_with(
    buffer: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TestcardError> {
    encode::encode_p3(buffer, stop)
}

pub(crate) fn encode_binary_with(
    buffer: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TestcardError> {
    encode::encode_p6(buffer, stop)
}

pub(crate) fn decode_with(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TestcardError> {
    decode::decode_p6(data, limits, stop)
}

use alloc::vec::Vec;
use enough::Stop;

use super::{crc, zlib};
use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

/// Fixed 8-byte PNG signature.
const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

pub(super) fn encode_png(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let (width, height) = (buffer.width(), buffer.height());

    // IHDR width/height are 32-bit but must stay below 2^31.
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(TestcardError::DimensionsTooLarge { width, height });
    }
    // The chunk length field is 32-bit too, capped at 2^31 - 1. Dimensions
    // that pass the IHDR guard can still produce an IDAT payload the frame
    // cannot carry; reject those before allocating anything.
    if idat_len(width, height) > i32::MAX as u64 {
        return Err(TestcardError::DimensionsTooLarge { width, height });
    }

    stop.check()?;

    let raw = filtered_scanlines(buffer, stop)?;
    let idat = zlib::stored_stream(&raw, stop)?;

    let mut out = Vec::with_capacity(SIGNATURE.len() + 12 + 13 + 12 + idat.len() + 12);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr_data(width, height));
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// IDAT payload size: zlib header and trailer plus stored-block framing
/// around the filter-prefixed scanlines.
fn idat_len(width: u32, height: u32) -> u64 {
    let raw = (u64::from(width) * 3 + 1) * u64::from(height);
    let blocks = raw.div_ceil(zlib::STORED_BLOCK_MAX as u64).max(1);
    2 + raw + 5 * blocks + 4
}

/// Scanlines with the per-row filter byte: 0x00 ("None"), then raw samples.
fn filtered_scanlines(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let height = buffer.height();
    let row_len = buffer.width() as usize * 3;
    let mut raw = Vec::with_capacity((row_len + 1) * height as usize);
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        raw.push(0x00);
        raw.extend_from_slice(buffer.row(y));
    }
    Ok(raw)
}

/// IHDR payload: dimensions, bit depth 8, color type 2 (truecolor), then
/// compression/filter/interlace methods all 0.
fn ihdr_data(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = 2; // color type: truecolor
    data
}

/// Frame one chunk: BE32 data length, type, data, BE32 CRC over type+data.
///
/// Callers must have bounded the payload already; the length field wraps
/// past u32 otherwise.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    debug_assert!(data.len() as u64 <= i32::MAX as u64);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc::crc32(&[chunk_type, data]).to_be_bytes());
}

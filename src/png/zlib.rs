//! Stored-mode zlib stream: no compression, just framing and Adler-32.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TestcardError;

/// Largest payload a single stored deflate block can carry (LEN is u16).
pub(super) const STORED_BLOCK_MAX: usize = 65_535;

/// Wrap `data` in a zlib stream of stored deflate blocks.
///
/// Header byte pair 0x78 0x01: CMF = deflate with a 32 KiB window, FLG
/// chosen so the pair is a multiple of 31 with no preset dictionary.
pub(super) fn stored_stream(data: &[u8], stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let block_count = data.len().div_ceil(STORED_BLOCK_MAX).max(1);
    let mut out = Vec::with_capacity(2 + data.len() + block_count * 5 + 4);
    out.push(0x78);
    out.push(0x01);

    let mut chunks = data.chunks(STORED_BLOCK_MAX).peekable();
    // An empty input still needs one (final, zero-length) stored block.
    if chunks.peek().is_none() {
        write_stored_block(&mut out, &[], true);
    }
    while let Some(chunk) = chunks.next() {
        stop.check()?;
        write_stored_block(&mut out, chunk, chunks.peek().is_none());
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    Ok(out)
}

/// One stored block: BFINAL/BTYPE byte (BTYPE 00), then LEN and its one's
/// complement as little-endian u16, then the payload verbatim. The header
/// byte leaves the stream byte-aligned, so no explicit alignment step.
fn write_stored_block(out: &mut Vec<u8>, payload: &[u8], last: bool) {
    out.push(u8::from(last));
    let len = payload.len() as u16;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(payload);
}

const ADLER_MOD: u32 = 65_521;
/// Largest run of 0xFF bytes that cannot overflow u32 accumulators.
const ADLER_NMAX: usize = 5552;

/// Adler-32 of `data` (zlib's checksum over the uncompressed payload).
pub(super) fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for chunk in data.chunks(ADLER_NMAX) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= ADLER_MOD;
        b %= ADLER_MOD;
    }
    (b << 16) | a
}

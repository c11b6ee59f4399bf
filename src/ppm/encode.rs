use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

/// P3: decimal samples, one text line per image row.
pub(super) fn encode_p3(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    let header = format!("P3\n{w} {h}\n255\n");
    // Worst case four bytes per sample ("255" plus separator)
    let mut out = Vec::with_capacity(header.len() + buffer.byte_len() * 4);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        let row = buffer.row(y);
        for (i, &sample) in row.iter().enumerate() {
            if i > 0 {
                out.push(b' ');
            }
            push_decimal(&mut out, sample);
        }
        out.push(b'\n');
    }

    Ok(out)
}

/// P6: raw RGB bytes straight after the header, no padding.
pub(super) fn encode_p6(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    stop.check()?;
    let header = format!("P6\n{w} {h}\n255\n");
    let mut out = Vec::with_capacity(header.len() + buffer.byte_len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(buffer.samples());
    Ok(out)
}

/// Append the decimal form of a sample without going through fmt.
fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
}

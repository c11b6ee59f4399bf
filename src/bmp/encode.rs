use alloc::vec::Vec;
use enough::Stop;
use rgb::RGB8;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

const HEADERS_LEN: usize = 14 + 40;

pub(super) fn encode_bmp(buffer: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, TestcardError> {
    let (width, height) = (buffer.width(), buffer.height());
    let w = width as usize;
    let h = height as usize;

    // Width and height are signed 32-bit in the DIB header.
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(TestcardError::DimensionsTooLarge { width, height });
    }

    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(TestcardError::DimensionsTooLarge { width, height })?;
    let pixel_data_size = row_stride
        .checked_mul(h)
        .ok_or(TestcardError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(HEADERS_LEN)
        .filter(|&s| s <= u32::MAX as usize)
        .ok_or(TestcardError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, file_size, pixel_data_size, width, height);

    let pad_bytes = row_stride - w * 3;
    // Bottom-up scan order: last image row first.
    for y in (0..height).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            let RGB8 { r, g, b } = buffer.get(x, y);
            out.push(b);
            out.push(g);
            out.push(r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADERS_LEN as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

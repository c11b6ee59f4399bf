use alloc::format;
use enough::Stop;

use crate::buffer::{CHANNELS, PixelBuffer};
use crate::error::TestcardError;
use crate::limits::Limits;

/// Parsed P6 header plus the offset of the first pixel byte.
struct P6Header {
    width: u32,
    height: u32,
    data_offset: usize,
}

pub(super) fn decode_p6(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TestcardError> {
    let header = parse_header(data)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    stop.check()?;

    let expected = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(CHANNELS))
        .ok_or(TestcardError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;

    if let Some(limits) = limits {
        limits.check_memory(expected)?;
    }

    let pixel_data = data
        .get(header.data_offset..)
        .ok_or(TestcardError::UnexpectedEof)?;
    if pixel_data.len() < expected {
        return Err(TestcardError::UnexpectedEof);
    }

    PixelBuffer::from_samples(header.width, header.height, pixel_data[..expected].to_vec())
}

fn parse_header(data: &[u8]) -> Result<P6Header, TestcardError> {
    if data.len() < 2 || &data[..2] != b"P6" {
        return Err(TestcardError::UnrecognizedFormat);
    }

    let mut pos = 2;
    let width = read_field(data, &mut pos, "width")?;
    let height = read_field(data, &mut pos, "height")?;
    let maxval = read_field(data, &mut pos, "maxval")?;

    if width == 0 || height == 0 {
        return Err(TestcardError::InvalidHeader(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    if maxval != 255 {
        return Err(TestcardError::UnsupportedVariant(format!(
            "maxval {maxval} (only 255 is supported)"
        )));
    }

    // Exactly one whitespace byte separates the header from pixel data.
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        Some(_) => {
            return Err(TestcardError::InvalidHeader(
                "missing whitespace after maxval".into(),
            ));
        }
        None => return Err(TestcardError::UnexpectedEof),
    }

    Ok(P6Header {
        width,
        height,
        data_offset: pos,
    })
}

/// Read one whitespace-delimited decimal header field, skipping `#` comments
/// (netpbm convention: a comment runs to the end of its line).
fn read_field(data: &[u8], pos: &mut usize, name: &str) -> Result<u32, TestcardError> {
    loop {
        match data.get(*pos) {
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(b'#') => {
                while let Some(&b) = data.get(*pos) {
                    *pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            }
            Some(_) => break,
            None => return Err(TestcardError::UnexpectedEof),
        }
    }

    let start = *pos;
    while let Some(b) = data.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        *pos += 1;
    }
    if *pos == start {
        return Err(TestcardError::InvalidHeader(format!(
            "{name} is not a decimal number"
        )));
    }

    let mut value: u32 = 0;
    for &b in &data[start..*pos] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or_else(|| TestcardError::InvalidHeader(format!("{name} overflows u32")))?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_header;
    use crate::error::TestcardError;

    #[test]
    fn header_with_comments() {
        let h = parse_header(b"P6 # test card\n# another comment\n3 2\n255\n").unwrap();
        assert_eq!((h.width, h.height), (3, 2));
        assert_eq!(h.data_offset, 41);
    }

    #[test]
    fn rejects_wrong_magic() {
        assert!(matches!(
            parse_header(b"P5\n1 1\n255\n"),
            Err(TestcardError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert!(matches!(
            parse_header(b"P6\nwide 2\n255\n"),
            Err(TestcardError::InvalidHeader(_))
        ));
    }
}

use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;
use crate::{bmp, png, ppm};

/// The output containers this crate can produce. Closed set.
///
/// Both PPM variants share the `.ppm` extension; the tag, not the filename,
/// decides which one is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Png,
    Bmp,
    PpmAscii,
    PpmBinary,
}

impl FormatTag {
    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatTag::Png => "png",
            FormatTag::Bmp => "bmp",
            FormatTag::PpmAscii | FormatTag::PpmBinary => "ppm",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatTag::Png => "png",
            FormatTag::Bmp => "bmp",
            FormatTag::PpmAscii => "ppm_p3",
            FormatTag::PpmBinary => "ppm_p6",
        })
    }
}

impl FromStr for FormatTag {
    type Err = TestcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(FormatTag::Png),
            "bmp" => Ok(FormatTag::Bmp),
            "ppm_p3" => Ok(FormatTag::PpmAscii),
            "ppm_p6" => Ok(FormatTag::PpmBinary),
            _ => Err(TestcardError::InvalidParameter(format!(
                "unknown format {s:?} (expected png, bmp, ppm_p3, or ppm_p6)"
            ))),
        }
    }
}

/// Encode a buffer into the container selected by `tag`.
pub fn encode(
    buffer: &PixelBuffer,
    tag: FormatTag,
    stop: impl Stop,
) -> Result<Vec<u8>, TestcardError> {
    encode_with(buffer, tag, &stop)
}

pub(crate) fn encode_with(
    buffer: &PixelBuffer,
    tag: FormatTag,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TestcardError> {
    match tag {
        FormatTag::Png => png::encode_with(buffer, stop),
        FormatTag::Bmp => bmp::encode_with(buffer, stop),
        FormatTag::PpmAscii => ppm::encode_ascii_with(buffer, stop),
        FormatTag::PpmBinary => ppm::encode_binary_with(buffer, stop),
    }
}

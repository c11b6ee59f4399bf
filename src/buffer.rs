use alloc::vec;
use alloc::vec::Vec;
use rgb::RGB8;

use crate::error::TestcardError;

/// Interleaved RGB8 samples per pixel.
pub(crate) const CHANNELS: usize = 3;

/// An owned width×height grid of RGB8 samples, row-major, top-down.
///
/// The sample array is always exactly `width * height * 3` bytes — no
/// partial rows, no padding. Generators fill a fresh buffer; encoders only
/// ever read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled (black) buffer.
    ///
    /// Rejects zero dimensions and sizes that overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, TestcardError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![0u8; len],
        })
    }

    /// Wrap an existing interleaved RGB sample array.
    ///
    /// `samples.len()` must be exactly `width * height * 3`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, TestcardError> {
        let len = checked_len(width, height)?;
        if samples.len() != len {
            return Err(TestcardError::BufferTooSmall {
                needed: len,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The interleaved RGB sample array, row-major, top-down.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Total sample bytes (`width * height * 3`).
    pub fn byte_len(&self) -> usize {
        self.samples.len()
    }

    /// One image row as raw RGB bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.samples[start..start + stride]
    }

    pub fn get(&self, x: u32, y: u32) -> RGB8 {
        let off = self.offset(x, y);
        RGB8 {
            r: self.samples[off],
            g: self.samples[off + 1],
            b: self.samples[off + 2],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, px: RGB8) {
        let off = self.offset(x, y);
        self.samples[off] = px.r;
        self.samples[off + 1] = px.g;
        self.samples[off + 2] = px.b;
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize, TestcardError> {
    if width == 0 || height == 0 {
        return Err(TestcardError::InvalidParameter(alloc::format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(CHANNELS))
        .ok_or(TestcardError::DimensionsTooLarge { width, height })
}

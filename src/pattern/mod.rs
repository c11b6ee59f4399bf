//! Pattern specs and the generators that fill pixel buffers from them.

mod generate;

use alloc::format;
use core::str::FromStr;
use enough::Stop;
use rgb::RGB8;

use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

/// A subset of the R, G, B channels a pattern is allowed to modulate.
///
/// Channels outside the mask stay at the background value (0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channels {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Channels {
    pub const ALL: Channels = Channels {
        r: true,
        g: true,
        b: true,
    };

    pub fn is_empty(&self) -> bool {
        !(self.r || self.g || self.b)
    }

    /// Zero out the unmasked channels of `color`.
    pub(crate) fn mask(&self, color: RGB8) -> RGB8 {
        RGB8 {
            r: if self.r { color.r } else { 0 },
            g: if self.g { color.g } else { 0 },
            b: if self.b { color.b } else { 0 },
        }
    }

    /// Broadcast one sample value into the masked channels.
    pub(crate) fn splat(&self, value: u8) -> RGB8 {
        self.mask(RGB8 {
            r: value,
            g: value,
            b: value,
        })
    }
}

impl FromStr for Channels {
    type Err = TestcardError;

    /// Parse a mask like `"r"`, `"gb"`, `"rgb"`. Each letter at most once.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Channels {
            r: false,
            g: false,
            b: false,
        };
        for c in s.chars() {
            let slot = match c.to_ascii_lowercase() {
                'r' => &mut out.r,
                'g' => &mut out.g,
                'b' => &mut out.b,
                _ => {
                    return Err(TestcardError::InvalidParameter(format!(
                        "unknown channel {c:?} in mask {s:?}"
                    )));
                }
            };
            if *slot {
                return Err(TestcardError::InvalidParameter(format!(
                    "duplicate channel {c:?} in mask {s:?}"
                )));
            }
            *slot = true;
        }
        if out.is_empty() {
            return Err(TestcardError::InvalidParameter(
                "channel mask must name at least one of r, g, b".into(),
            ));
        }
        Ok(out)
    }
}

/// Gradient direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left → bottom-right.
    DiagLr,
    /// Top-right → bottom-left.
    DiagRl,
}

impl FromStr for Direction {
    type Err = TestcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "diag_lr" => Ok(Direction::DiagLr),
            "diag_rl" => Ok(Direction::DiagRl),
            _ => Err(TestcardError::InvalidParameter(format!(
                "unknown direction {s:?}"
            ))),
        }
    }
}

/// What to draw. Closed set; every variant carries its own parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSpec {
    /// Every pixel set to `color`.
    Solid { size: (u32, u32), color: RGB8 },
    /// Checkerboard over a black background. Even tiles stay background;
    /// odd tiles take `color`, restricted to `channels` when present.
    Checker {
        size: (u32, u32),
        block: u32,
        color: RGB8,
        channels: Option<Channels>,
    },
    /// Horizontal stripes: odd stripes take `color`, even stay background.
    Lines {
        size: (u32, u32),
        line_height: u32,
        color: RGB8,
    },
    /// Linear ramp 0→255 along `direction` in the masked channels.
    Gradient {
        size: (u32, u32),
        channels: Channels,
        direction: Direction,
        descending: bool,
    },
}

impl PatternSpec {
    pub fn size(&self) -> (u32, u32) {
        match *self {
            PatternSpec::Solid { size, .. }
            | PatternSpec::Checker { size, .. }
            | PatternSpec::Lines { size, .. }
            | PatternSpec::Gradient { size, .. } => size,
        }
    }

    /// Parameter validation, run before any buffer is allocated.
    fn validate(&self) -> Result<(), TestcardError> {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return Err(TestcardError::InvalidParameter(format!(
                "size must be positive, got {w}x{h}"
            )));
        }
        match *self {
            PatternSpec::Checker { block, .. } if block < 1 => Err(
                TestcardError::InvalidParameter(format!("block size must be >= 1, got {block}")),
            ),
            PatternSpec::Lines { line_height, .. } if line_height < 1 => {
                Err(TestcardError::InvalidParameter(format!(
                    "line height must be >= 1, got {line_height}"
                )))
            }
            PatternSpec::Gradient { channels, .. } if channels.is_empty() => Err(
                TestcardError::InvalidParameter("gradient channel mask is empty".into()),
            ),
            _ => Ok(()),
        }
    }
}

/// Render a pattern into a fresh [`PixelBuffer`].
///
/// Validates the spec first; on error no buffer is allocated. On success
/// every sample has been written exactly once.
pub fn render(spec: &PatternSpec, stop: impl Stop) -> Result<PixelBuffer, TestcardError> {
    spec.validate()?;
    let (w, h) = spec.size();
    let mut buffer = PixelBuffer::new(w, h)?;

    match *spec {
        PatternSpec::Solid { color, .. } => generate::fill_solid(&mut buffer, color, &stop)?,
        PatternSpec::Checker {
            block,
            color,
            channels,
            ..
        } => generate::fill_checker(&mut buffer, block, color, channels, &stop)?,
        PatternSpec::Lines {
            line_height, color, ..
        } => generate::fill_lines(&mut buffer, line_height, color, &stop)?,
        PatternSpec::Gradient {
            channels,
            direction,
            descending,
            ..
        } => generate::fill_gradient(&mut buffer, channels, direction, descending, &stop)?,
    }

    Ok(buffer)
}

/// Parse a color triple in `R,G,B` form, each component in [0,255].
///
/// Out-of-range components are rejected, never clamped.
pub fn parse_color(s: &str) -> Result<RGB8, TestcardError> {
    let mut parts = s.split(',');
    let mut next = |name: &str| -> Result<u8, TestcardError> {
        let part = parts
            .next()
            .ok_or_else(|| TestcardError::InvalidParameter(format!("color {s:?}: missing {name}")))?
            .trim();
        part.parse::<u8>().map_err(|_| {
            TestcardError::InvalidParameter(format!(
                "color {s:?}: {name} component {part:?} is not an integer in 0..=255"
            ))
        })
    };
    let color = RGB8 {
        r: next("red")?,
        g: next("green")?,
        b: next("blue")?,
    };
    if parts.next().is_some() {
        return Err(TestcardError::InvalidParameter(format!(
            "color {s:?}: expected exactly three components"
        )));
    }
    Ok(color)
}

/// Parse a size in `WIDTHxHEIGHT` form, both positive.
pub fn parse_size(s: &str) -> Result<(u32, u32), TestcardError> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| {
        TestcardError::InvalidParameter(format!("size {s:?} is not in WIDTHxHEIGHT form"))
    })?;
    let parse_dim = |part: &str, name: &str| -> Result<u32, TestcardError> {
        let v = part.trim().parse::<u32>().map_err(|_| {
            TestcardError::InvalidParameter(format!("size {s:?}: bad {name} {part:?}"))
        })?;
        if v == 0 {
            return Err(TestcardError::InvalidParameter(format!(
                "size {s:?}: {name} must be positive"
            )));
        }
        Ok(v)
    };
    Ok((parse_dim(w, "width")?, parse_dim(h, "height")?))
}

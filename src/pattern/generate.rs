//! The four pattern fills. Each writes every sample of the buffer once.

use enough::Stop;
use rgb::RGB8;

use super::{Channels, Direction};
use crate::buffer::PixelBuffer;
use crate::error::TestcardError;

const BACKGROUND: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

pub(super) fn fill_solid(
    buffer: &mut PixelBuffer,
    color: RGB8,
    stop: &dyn Stop,
) -> Result<(), TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            buffer.set(x, y, color);
        }
    }
    Ok(())
}

pub(super) fn fill_checker(
    buffer: &mut PixelBuffer,
    block: u32,
    color: RGB8,
    channels: Option<Channels>,
    stop: &dyn Stop,
) -> Result<(), TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    let foreground = channels.unwrap_or(Channels::ALL).mask(color);
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let odd_tile = (x / block + y / block) % 2 == 1;
            buffer.set(x, y, if odd_tile { foreground } else { BACKGROUND });
        }
    }
    Ok(())
}

pub(super) fn fill_lines(
    buffer: &mut PixelBuffer,
    line_height: u32,
    color: RGB8,
    stop: &dyn Stop,
) -> Result<(), TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        let odd_stripe = (y / line_height) % 2 == 1;
        let px = if odd_stripe { color } else { BACKGROUND };
        for x in 0..w {
            buffer.set(x, y, px);
        }
    }
    Ok(())
}

pub(super) fn fill_gradient(
    buffer: &mut PixelBuffer,
    channels: Channels,
    direction: Direction,
    descending: bool,
    stop: &dyn Stop,
) -> Result<(), TestcardError> {
    let (w, h) = (buffer.width(), buffer.height());
    // Diagonal positions and spans run up to w + h, which can overflow u32
    // at the extreme end of valid sizes; widen before adding.
    let diag_span = u64::from(w) + u64::from(h) - 1;
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let value = match direction {
                Direction::Horizontal => ramp(x.into(), w.into(), descending),
                Direction::Vertical => ramp(y.into(), h.into(), descending),
                Direction::DiagLr => {
                    ramp(u64::from(x) + u64::from(y), diag_span, descending)
                }
                Direction::DiagRl => {
                    ramp(u64::from(w - 1 - x) + u64::from(y), diag_span, descending)
                }
            };
            buffer.set(x, y, channels.splat(value));
        }
    }
    Ok(())
}

/// Normalized ramp value at `pos` of `span` steps, scaled to 0..=255.
///
/// A degenerate span (a single step) has no extent to ramp over and yields
/// 0 regardless of `descending`.
fn ramp(pos: u64, span: u64, descending: bool) -> u8 {
    if span <= 1 {
        return 0;
    }
    let mut t = pos as f64 / (span - 1) as f64;
    if descending {
        t = 1.0 - t;
    }
    (t * 255.0).round() as u8
}

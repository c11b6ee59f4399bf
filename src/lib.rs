//! # testcard
//!
//! Synthetic raster test patterns — solid fills, checkerboards, line
//! stripes, channel gradients — serialized into byte-exact PNG, BMP, and
//! PPM (P3/P6) containers, plus binary-PPM decode for format conversion.
//!
//! The containers are written from scratch: PNG chunk framing, CRC-32 and
//! Adler-32 checksums, and a stored-mode deflate stream; BMP header layout,
//! bottom-up BGR rows and stride padding; PPM headers and sample streams.
//! Correctness over size — the PNG deflate stream is uncompressed.
//!
//! ## Supported containers
//!
//! - **PNG** — 8-bit truecolor, no interlace, filter 0, stored deflate
//! - **BMP** — 24-bit uncompressed BITMAPINFOHEADER, encode only
//! - **PPM P3** — ASCII, encode only
//! - **PPM P6** — binary, encode and decode
//!
//! ## Non-Goals
//!
//! - Lossy compression, real Huffman deflate (stored blocks only)
//! - Color spaces beyond 8-bit RGB, interlacing, BMP compression modes
//! - ASCII PPM decode
//!
//! ## Usage
//!
//! ```no_run
//! use testcard::{FormatTag, PatternSpec, render, encode};
//! use enough::Unstoppable;
//!
//! let spec = PatternSpec::Solid {
//!     size: (64, 64),
//!     color: rgb::RGB8 { r: 255, g: 0, b: 0 },
//! };
//! let buffer = render(&spec, Unstoppable)?;
//! let bytes = encode(&buffer, FormatTag::Png, Unstoppable)?;
//! # Ok::<(), testcard::TestcardError>(())
//! ```
//!
//! With the default `std` feature, [`write_outputs`] fans one buffer out to
//! several containers on disk, and [`convert_file`] chains decode→encode.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod error;
mod limits;

pub mod pattern;

pub mod bmp;
pub mod png;
pub mod ppm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod output;

// Re-exports
pub use buffer::PixelBuffer;
pub use decode::decode;
pub use encode::{FormatTag, encode};
pub use enough::{Stop, Unstoppable};
pub use error::TestcardError;
pub use limits::Limits;
pub use pattern::{Channels, Direction, PatternSpec, parse_color, parse_size, render};
pub use rgb::RGB8;

#[cfg(feature = "std")]
pub use output::{FormatOutcome, OutputRequest, convert_file, write_outputs};

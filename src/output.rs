//! Format dispatcher and conversion pipeline: fan one buffer out to files.

use alloc::vec::Vec;
use enough::Stop;
use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::encode::{FormatTag, encode_with};
use crate::error::TestcardError;
use crate::limits::Limits;

/// Where to write and which containers to produce.
#[derive(Clone, Debug)]
pub struct OutputRequest {
    /// Base path; each format lands at `{base}.{ext}`.
    pub base_path: PathBuf,
    pub formats: Vec<FormatTag>,
}

impl OutputRequest {
    pub fn new(base_path: impl Into<PathBuf>, formats: Vec<FormatTag>) -> Self {
        Self {
            base_path: base_path.into(),
            formats,
        }
    }
}

/// One per requested format: where the file went and whether it got there.
#[derive(Debug)]
pub struct FormatOutcome {
    pub tag: FormatTag,
    pub path: PathBuf,
    pub result: Result<(), TestcardError>,
}

/// Encode the buffer into every requested format and write each file.
///
/// Formats are independent: one failing encode or write never aborts its
/// siblings, and the caller gets one [`FormatOutcome`] per tag. Files appear
/// atomically (written to a temp sibling, then renamed), so a failed format
/// leaves no partial file behind.
///
/// Returns `Err` only for requests that are invalid as a whole (an empty
/// format set).
pub fn write_outputs(
    buffer: &PixelBuffer,
    request: &OutputRequest,
    stop: impl Stop,
) -> Result<Vec<FormatOutcome>, TestcardError> {
    if request.formats.is_empty() {
        return Err(TestcardError::InvalidParameter(
            "no output formats requested".into(),
        ));
    }
    if let Some(parent) = request.base_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut outcomes = Vec::with_capacity(request.formats.len());
    for &tag in &request.formats {
        let path = request.base_path.with_extension(tag.extension());
        let result = encode_with(buffer, tag, &stop).and_then(|bytes| write_atomic(&path, &bytes));
        outcomes.push(FormatOutcome { tag, path, result });
    }
    Ok(outcomes)
}

/// Read `source`, decode it by magic bytes, and feed the dispatcher.
///
/// A file that cannot be read or decoded fails the conversion as a whole;
/// there is nothing to encode. Encode-side failures stay per format.
pub fn convert_file(
    source: &Path,
    request: &OutputRequest,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Vec<FormatOutcome>, TestcardError> {
    let data = fs::read(source)?;
    let buffer = crate::decode::decode_with(&data, limits, &stop)?;
    write_outputs(&buffer, request, stop)
}

/// Write-then-rename so no reader ever sees a half-written file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), TestcardError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_owned();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

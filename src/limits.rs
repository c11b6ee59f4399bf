/// Resource limits for decoding untrusted input.
///
/// Both fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions against the pixel limit.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::TestcardError> {
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::TestcardError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::TestcardError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::TestcardError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

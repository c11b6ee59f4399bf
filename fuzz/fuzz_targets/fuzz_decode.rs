#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the magic-sniffing decoder — must never panic
    let _ = testcard::decode(data, None, enough::Unstoppable);

    // And with tight limits in place
    let limits = testcard::Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(1 << 24),
    };
    let _ = testcard::decode(data, Some(&limits), enough::Unstoppable);
});

#![no_main]
use enough::Unstoppable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick small dimensions, the rest are samples
    if data.len() < 2 {
        return;
    }
    let w = u32::from(data[0] % 16) + 1;
    let h = u32::from(data[1] % 16) + 1;
    let rest = &data[2..];
    let need = (w * h * 3) as usize;
    if rest.len() < need {
        return;
    }

    let buffer = testcard::PixelBuffer::from_samples(w, h, rest[..need].to_vec()).unwrap();
    let encoded = testcard::ppm::encode_binary(&buffer, Unstoppable).unwrap();
    let decoded = testcard::decode(&encoded, None, Unstoppable).unwrap();
    assert_eq!(decoded, buffer);

    // Every container must accept any valid buffer
    for tag in [
        testcard::FormatTag::Png,
        testcard::FormatTag::Bmp,
        testcard::FormatTag::PpmAscii,
    ] {
        testcard::encode(&buffer, tag, Unstoppable).unwrap();
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhuff::{compress_with_config, decompress, Lz77Config};

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the window geometry, the rest is the payload
    if data.len() < 2 {
        return;
    }
    let window = (data[0] as usize).max(1);
    let preview = (data[1] as usize).max(1);
    let payload = &data[2..];

    // Limit data size to avoid slowdowns
    let payload = if payload.len() > 16 * 1024 { &payload[..16 * 1024] } else { payload };

    let config = Lz77Config::new(window, preview).expect("lengths are within 1-255");
    let compressed = compress_with_config(payload, &config).expect("compression failed");
    let restored = decompress(&compressed).expect("decompression failed");
    assert_eq!(restored, payload, "Round-trip mismatch");
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhuff::decompress;

fuzz_target!(|data: &[u8]| {
    // Arbitrary containers may be rejected - that's OK
    // We're looking for panics/crashes, not errors
    let _ = decompress(data);
});

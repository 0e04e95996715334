#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhuff::lz77::reconstruct;

fuzz_target!(|data: &[u8]| {
    // Exercise the token stream parser and back-reference checks directly
    let _ = reconstruct(data);
});

#![no_main]

use fxlzf::decompress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding may fail on malformed input - that's OK
    // We're looking for panics/out-of-bounds reads, not errors
    let _ = decompress(data);
});

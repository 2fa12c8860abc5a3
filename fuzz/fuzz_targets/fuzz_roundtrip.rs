#![no_main]

use fxlzf::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let wire = compress(data);
    let restored = decompress(&wire).expect("compressor produced an undecodable stream");
    assert_eq!(restored, data);
});

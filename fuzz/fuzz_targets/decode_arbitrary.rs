#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4stream::stream::StreamDecoder;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a sequence of blocks: errors are expected, panics
    // and out-of-bounds accesses are not.
    let mut dec = StreamDecoder::new(None);
    for block in data.chunks(257) {
        if dec.update(block, 1 << 16).is_err() {
            dec.reset(None);
        }
    }
});

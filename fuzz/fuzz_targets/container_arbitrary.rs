#![no_main]
use std::io::Read;

use libfuzzer_sys::fuzz_target;
use lz4stream::io::StreamReader;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut reader) = StreamReader::new(data, None) {
        let mut sink = Vec::new();
        let _ = reader.read_to_end(&mut sink);
    }
});

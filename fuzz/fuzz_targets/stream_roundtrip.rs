#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4stream::stream::{StreamDecoder, StreamEncoder, Variant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // The first two bytes pick the variant and a block size up to 4 KiB.
    let variant = if data[0] & 1 == 0 { Variant::Fast } else { Variant::HighRatio };
    let block_size = 1 + (((data[0] as usize) << 4) | (data[1] as usize & 0x0F));
    let payload = &data[2..];

    let mut enc = StreamEncoder::new(block_size, variant, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    for block in payload.chunks(block_size) {
        let packed = enc.update(block).unwrap();
        let restored = dec.update(&packed, block.len()).unwrap();
        assert_eq!(restored, block, "stream round-trip mismatch");
    }
});

// Integration tests for `StreamEncoder`.

use lz4stream::block::decompress_to_vec;
use lz4stream::stream::{Error, StreamDecoder, StreamEncoder, Variant};
use lz4stream::{BUFFER_FLOOR, HISTORY_WINDOW};

fn pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut x = seed | 1;
    (0..len)
        .map(|i| {
            x = x.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
            // mostly low-entropy, occasional random byte
            if x >> 28 == 0 {
                (x >> 20) as u8
            } else {
                b"abcdefgh"[i % 8]
            }
        })
        .collect()
}

#[test]
fn block_size_hint_boundary() {
    let mut enc = StreamEncoder::new(1 << 20, Variant::Fast, None).unwrap();
    assert_eq!(enc.block_size(), 1 << 20);
    assert!(enc.update(&vec![1u8; 1 << 20]).is_ok());
    assert_eq!(enc.update(&vec![1u8; (1 << 20) + 1]), Err(Error::BufferOverflow));
}

#[test]
fn small_hints_are_raised_to_the_floor() {
    let enc = StreamEncoder::new(1, Variant::HighRatio, None).unwrap();
    assert_eq!(enc.capacity(), BUFFER_FLOOR);
    assert_eq!(enc.block_size(), BUFFER_FLOOR - HISTORY_WINDOW);
    assert_eq!(enc.variant(), Variant::HighRatio);
}

#[test]
fn overflow_does_not_disturb_the_session() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    let a = pattern(3000, 1);
    let packed = enc.update(&a).unwrap();
    assert_eq!(dec.update(&packed, 4096).unwrap(), a);

    let cursor = enc.cursor();
    assert_eq!(
        enc.update(&vec![0u8; enc.block_size() + 1]),
        Err(Error::BufferOverflow)
    );
    assert_eq!(enc.cursor(), cursor);

    let b = pattern(3000, 2);
    let packed = enc.update(&b).unwrap();
    assert_eq!(dec.update(&packed, 4096).unwrap(), b);
}

#[test]
fn bounded_update_failure_requires_reset() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    let block = pattern(4096, 3);
    assert_eq!(enc.update_bounded(&block, 8), Err(Error::CodecFailure));
    assert_eq!(enc.update(&block), Err(Error::ResetRequired));

    enc.reset(None, None, None).unwrap();
    let packed = enc.update(&block).unwrap();
    assert_eq!(decompress_to_vec(&packed, block.len()).unwrap(), block);
}

#[test]
fn update_into_reuses_the_destination() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    let mut dest = vec![0xEE; 10];
    let n = enc.update_into(b"short", &mut dest, None).unwrap();
    assert_eq!(n, dest.len());
    assert_eq!(decompress_to_vec(&dest, 5).unwrap(), b"short");
}

#[test]
fn empty_block_encodes_to_single_token() {
    let mut enc = StreamEncoder::new(1024, Variant::HighRatio, None).unwrap();
    assert_eq!(enc.update(&[]).unwrap(), vec![0x00]);
}

#[test]
fn reset_validates_before_touching_state() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    enc.update(b"some history").unwrap();
    let cursor = enc.cursor();
    assert!(matches!(enc.reset(Some(usize::MAX), None, None), Err(Error::InvalidArgument)));
    assert_eq!(enc.cursor(), cursor);
    assert_eq!(enc.capacity(), BUFFER_FLOOR);
}

#[test]
fn reset_resizes_and_switches_variant() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    enc.reset(Some(1 << 22), Some(Variant::HighRatio), None).unwrap();
    assert_eq!(enc.capacity(), (1 << 22) + HISTORY_WINDOW);
    assert_eq!(enc.variant(), Variant::HighRatio);

    // Zero keeps the current size.
    enc.reset(Some(0), None, None).unwrap();
    assert_eq!(enc.capacity(), (1 << 22) + HISTORY_WINDOW);
    assert_eq!(enc.variant(), Variant::HighRatio);
}

#[test]
fn reset_chains() {
    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    let out = enc
        .reset(None, None, None)
        .and_then(|e| e.update(b"chained"))
        .unwrap();
    assert_eq!(decompress_to_vec(&out, 7).unwrap(), b"chained");
}

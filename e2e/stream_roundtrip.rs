//! E2E Test Suite 01: Stream Round-Trip
//!
//! Drives encoder and decoder sessions end to end:
//! - the fixed 1 KiB "ABCD" scenario
//! - large shuffled payloads through both variants, ten blocks each
//! - oversized blocks and the stateless-decoder boundary
//! - long runs of blocks that force the encoder to slide

use lz4stream::oneshot::raw_uncompress;
use lz4stream::stream::{Error, StreamDecoder, StreamEncoder, Variant};
use lz4stream::xxhash::xxh32_oneshot;

/// 16 KiB holding every byte value 64 times in a fixed pseudo-random order.
fn shuffled_16k(seed: u64) -> Vec<u8> {
    let mut v: Vec<u8> = (0..16_384u32).map(|i| (i & 0xFF) as u8).collect();
    let mut x = seed | 1;
    for i in (1..v.len()).rev() {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        v.swap(i, (x % (i as u64 + 1)) as usize);
    }
    v
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: three "ABCD" blocks of 1 KiB
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abcd_blocks() {
    let block = b"ABCD".repeat(256);
    let mut enc = StreamEncoder::new(1024, Variant::Fast, None).unwrap();
    let mut dec = StreamDecoder::new(None);

    let mut restored = Vec::new();
    let mut sizes = Vec::new();
    for _ in 0..3 {
        let packed = enc.update(&block).unwrap();
        sizes.push(packed.len());
        restored.extend(dec.update(&packed, 1024).unwrap());
    }
    assert_eq!(restored.len(), 3072);
    assert_eq!(restored, b"ABCD".repeat(768));
    // Later blocks lean on history and are no larger than the first.
    assert!(sizes[1] <= sizes[0] && sizes[2] <= sizes[0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: 256 KiB high-ratio blocks, ten times
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_high_ratio_256k_blocks() {
    let src = shuffled_16k(1).repeat(16);
    assert_eq!(src.len(), 262_144);
    let digest = xxh32_oneshot(&src, 0);

    let mut enc = StreamEncoder::new(262_144, Variant::HighRatio, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    for round in 0..10 {
        let packed = enc.update(&src).unwrap();
        let out = dec.update(&packed, 262_144).unwrap();
        assert_eq!(xxh32_oneshot(&out, 0), digest, "round {round}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: 4 MiB fast blocks, ten times
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fast_4m_blocks() {
    let src = shuffled_16k(2).repeat(256);
    assert_eq!(src.len(), 1 << 22);

    let mut enc = StreamEncoder::new(1 << 22, Variant::Fast, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    for _ in 0..10 {
        let packed = enc.update(&src).unwrap();
        assert!(packed.len() < src.len() / 4);
        assert_eq!(dec.update(&packed, 1 << 22).unwrap(), src);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: block larger than the session accepts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_over_block_size() {
    let src = shuffled_16k(3).repeat(256);
    let mut enc = StreamEncoder::new(1 << 18, Variant::Fast, None).unwrap();
    assert_eq!(enc.update(&src), Err(Error::BufferOverflow));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: only the first block of a session stands alone
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_first_block_is_raw_decodable_second_is_not() {
    let src = vec![b'0'; 1 << 20];
    let mut enc = StreamEncoder::new(1 << 20, Variant::Fast, None).unwrap();

    let first = enc.update(&src).unwrap();
    assert_eq!(raw_uncompress(&first, None).unwrap(), src);

    let second = enc.update(&src).unwrap();
    assert_eq!(raw_uncompress(&second, None), Err(Error::CorruptData));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: many blocks across several slides, both variants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sliding_many_blocks() {
    for variant in [Variant::Fast, Variant::HighRatio] {
        let mut enc = StreamEncoder::new(10_000, Variant::Fast, None).unwrap();
        enc.reset(None, Some(variant), None).unwrap();
        let mut dec = StreamDecoder::new(None);
        let base = shuffled_16k(4);

        let mut total_in = 0usize;
        let mut total_out = 0usize;
        let mut slides = 0usize;
        for i in 0..120usize {
            let len = 1 + (i * 7919) % 10_000;
            let start = (i * 104_729) % (base.len() - len.min(base.len() - 1));
            let block: Vec<u8> = base.iter().cycle().skip(start).take(len).copied().collect();
            let before = enc.cursor();
            let packed = enc.update(&block).unwrap();
            if enc.cursor() < before {
                slides += 1;
            }
            let out = dec.update(&packed, 10_000).unwrap();
            assert_eq!(out, block, "{variant:?} block {i}");
            total_in += len;
            total_out += out.len();
        }
        assert_eq!(total_in, total_out);
        assert!(slides >= 2, "{variant:?}: expected slides, saw {slides}");
    }
}

//! E2E Test Suite 04: Interoperability
//!
//! Cross-checks block compatibility against an independent LZ4
//! implementation (`lz4_flex`):
//! - one-shot blocks from both compressors decode with `lz4_flex`
//! - stream blocks decode with `lz4_flex` given the preceding plaintext as
//!   an external dictionary
//! - blocks produced by `lz4_flex` decode through a `StreamDecoder`

use lz4stream::block::compress_to_vec;
use lz4stream::hc::compress_hc;
use lz4stream::stream::{StreamDecoder, StreamEncoder, Variant};
use lz4stream::HISTORY_WINDOW;

fn corpus(len: usize) -> Vec<u8> {
    let words: [&[u8]; 10] = [
        b"the ", b"quick ", b"brown ", b"fox ", b"jumps ", b"over ", b"lazy ", b"dog ", b"and ",
        b"runs ",
    ];
    let mut x = 0xDEAD_BEEFu32;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        out.extend_from_slice(words[x as usize % words.len()]);
        if x % 17 == 0 {
            out.push((x >> 8) as u8);
        }
    }
    out.truncate(len);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: one-shot blocks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_oneshot_blocks_decode_with_lz4_flex() {
    let src = corpus(200_000);
    let fast = compress_to_vec(&src).unwrap();
    assert_eq!(lz4_flex::block::decompress(&fast, src.len()).unwrap(), src);

    for level in [1, 4, 9, 12] {
        let hc = compress_hc(&src, level).unwrap();
        assert_eq!(
            lz4_flex::block::decompress(&hc, src.len()).unwrap(),
            src,
            "level {level}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: stream blocks with history
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_stream_blocks_decode_with_lz4_flex_dict() {
    for variant in [Variant::Fast, Variant::HighRatio] {
        let dict = corpus(3_000);
        let mut enc = StreamEncoder::new(16_384, variant, Some(dict.as_slice())).unwrap();

        // The session sees the dictionary right-aligned in a zeroed window.
        let mut history = vec![0u8; HISTORY_WINDOW - dict.len()];
        history.extend_from_slice(&dict);
        let data = corpus(400_000);
        for block in data.chunks(16_384) {
            let packed = enc.update(block).unwrap();
            let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
            let out = lz4_flex::block::decompress_with_dict(&packed, block.len(), window).unwrap();
            assert_eq!(out, block, "{variant:?}");
            history.extend_from_slice(block);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: foreign blocks through a session decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_lz4_flex_blocks_decode_in_session() {
    let data = corpus(100_000);
    let mut dec = StreamDecoder::new(None);
    let mut history: Vec<u8> = Vec::new();
    for block in data.chunks(10_000) {
        let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
        let packed = lz4_flex::block::compress_with_dict(block, window);
        assert_eq!(dec.update(&packed, 10_000).unwrap(), block);
        history.extend_from_slice(block);
    }
}

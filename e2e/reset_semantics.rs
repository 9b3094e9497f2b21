//! E2E Test Suite 02: Construction and Reset
//!
//! Validates argument checking on construction and reset, chained resets,
//! replay after reset, and resetting with a dictionary that recreates the
//! history a block was originally compressed against.

use lz4stream::stream::{Error, StreamDecoder, StreamEncoder, Variant};
use lz4stream::HISTORY_WINDOW;

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: argument validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_new_rejects_bad_sizes() {
    assert!(matches!(
        StreamEncoder::new(0, Variant::Fast, None),
        Err(Error::InvalidArgument)
    ));
    assert!(matches!(
        StreamEncoder::new(1 << 31, Variant::Fast, None),
        Err(Error::InvalidArgument)
    ));
    assert!(StreamEncoder::new(1 << 20, Variant::Fast, Some(b"abcdefg".as_slice())).is_ok());
}

#[test]
fn test_reset_returns_self_and_validates() {
    let mut enc = StreamEncoder::new(1 << 20, Variant::Fast, None).unwrap();
    let before: *const StreamEncoder = &enc;
    let after: *const StreamEncoder = enc.reset(None, None, None).unwrap();
    assert_eq!(before, after);

    enc.reset(Some(1 << 22), None, None).unwrap();
    assert_eq!(enc.block_size(), 1 << 22);
    assert!(matches!(enc.reset(Some(1 << 31), None, None), Err(Error::InvalidArgument)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: reset parity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_reset_reproduces_first_block() {
    let src = vec![b'0'; 1 << 20];
    let mut enc = StreamEncoder::new(1 << 20, Variant::Fast, None).unwrap();
    let dest1 = enc.update(&src).unwrap();
    let dest2 = enc.update(&src).unwrap();
    assert_ne!(dest1, dest2);

    enc.reset(None, None, None).unwrap();
    let dest3 = enc.update(&src).unwrap();
    assert_eq!(dest3, dest1);

    // A dictionary equal to the history the second block saw reproduces it.
    enc.reset(Some(1 << 20), Some(Variant::Fast), Some(&src[..HISTORY_WINDOW]))
        .unwrap();
    let dest4 = enc.update(&src).unwrap();
    assert_eq!(dest4, dest2);
}

#[test]
fn test_reset_parity_high_ratio() {
    let src = b"reset parity for the high-ratio codec; ".repeat(2000);
    let mut enc = StreamEncoder::new(src.len(), Variant::HighRatio, None).unwrap();
    let first = enc.update(&src).unwrap();
    enc.update(&src).unwrap();
    enc.reset(None, None, None).unwrap();
    assert_eq!(enc.update(&src).unwrap(), first);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: decoder follows an encoder through a reset
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_paired_reset_with_dictionary() {
    let dict = b"shared context: alpha beta gamma delta. ".repeat(10);
    let msg = b"alpha beta gamma delta, again and again. ".repeat(5);

    let mut enc = StreamEncoder::new(4096, Variant::Fast, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    let packed = enc.update(&msg).unwrap();
    assert_eq!(dec.update(&packed, 4096).unwrap(), msg);

    enc.reset(None, None, Some(dict.as_slice())).unwrap();
    dec.reset(Some(dict.as_slice()));
    for _ in 0..3 {
        let packed = enc.update(&msg).unwrap();
        assert_eq!(dec.update(&packed, 4096).unwrap(), msg);
    }
}

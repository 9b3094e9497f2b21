// Integration tests for the HC one-shot functions and `Lz4StreamHc`.

use lz4stream::block::{compress_bound, compress_to_vec, decompress_to_vec, decompress_with_prefix};
use lz4stream::hc::{
    compress_hc, compress_hc_into, Lz4StreamHc, LZ4HC_CLEVEL_DEFAULT, LZ4HC_CLEVEL_MAX,
};

fn prose(len: usize) -> Vec<u8> {
    let words: [&[u8]; 8] = [
        b"north ", b"south ", b"east ", b"west ", b"wind ", b"rain ", b"sun ", b"frost ",
    ];
    let mut x = 7u32;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.extend_from_slice(words[(x >> 24) as usize % words.len()]);
    }
    out.truncate(len);
    out
}

#[test]
fn every_level_round_trips() {
    let src = prose(20_000);
    for level in 1..=LZ4HC_CLEVEL_MAX {
        let packed = compress_hc(&src, level).unwrap();
        assert_eq!(decompress_to_vec(&packed, src.len()).unwrap(), src, "level {level}");
    }
}

#[test]
fn default_level_is_no_worse_than_fast() {
    let src = prose(100_000);
    let hc = compress_hc(&src, LZ4HC_CLEVEL_DEFAULT).unwrap();
    let fast = compress_to_vec(&src).unwrap();
    assert!(hc.len() <= fast.len());
}

#[test]
fn into_reports_small_destination() {
    let src = prose(10_000);
    let mut dst = vec![0u8; 10];
    assert!(compress_hc_into(&src, &mut dst, 9).is_err());
}

#[test]
fn level_is_clamped_and_kept_across_reset() {
    let mut stream = Lz4StreamHc::with_level(40);
    assert_eq!(stream.compression_level(), LZ4HC_CLEVEL_MAX);
    stream.set_compression_level(3);
    stream.reset();
    assert_eq!(stream.compression_level(), 3);
}

#[test]
fn streaming_blocks_reference_each_other() {
    let first = prose(30_000);
    let mut arena = first.clone();
    arena.extend_from_slice(&first[5_000..15_000]);

    let mut stream = Lz4StreamHc::new();
    let mut dst = vec![0u8; compress_bound(first.len())];
    stream.compress_continue(&arena, 0, first.len(), &mut dst).unwrap();
    let n = stream
        .compress_continue(&arena, first.len(), arena.len(), &mut dst)
        .unwrap();
    assert!(n < 100, "repeat of earlier text should collapse, got {n}");

    let mut out = arena[..first.len()].to_vec();
    out.resize(arena.len(), 0);
    let produced = decompress_with_prefix(&dst[..n], &mut out, first.len()).unwrap();
    assert_eq!(produced, 10_000);
    assert_eq!(&out[first.len()..], &first[5_000..15_000]);
}

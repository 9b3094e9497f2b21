// Integration tests for the one-shot fast block compressor.

use lz4stream::block::{
    compress_bound, compress_default, compress_fast, compress_to_vec, decompress_safe,
    decompress_to_vec, Lz4Error, LZ4_ACCELERATION_MAX,
};

fn text(len: usize) -> Vec<u8> {
    b"It was the best of times, it was the worst of times, "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn noise(len: usize) -> Vec<u8> {
    let mut x = 0x9E37_79B9u32;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        })
        .collect()
}

#[test]
fn empty_input_is_a_single_token() {
    assert_eq!(compress_to_vec(&[]).unwrap(), vec![0x00]);
    assert_eq!(decompress_to_vec(&[0x00], 16).unwrap(), Vec::<u8>::new());
}

#[test]
fn repetitive_text_shrinks_and_round_trips() {
    let src = text(100_000);
    let packed = compress_to_vec(&src).unwrap();
    assert!(packed.len() < src.len() / 10);
    assert_eq!(decompress_to_vec(&packed, src.len()).unwrap(), src);
}

#[test]
fn incompressible_input_stays_within_bound() {
    let src = noise(70_000);
    let packed = compress_to_vec(&src).unwrap();
    assert!(packed.len() <= compress_bound(src.len()));
    let mut out = vec![0u8; src.len()];
    assert_eq!(decompress_safe(&packed, &mut out).unwrap(), src.len());
    assert_eq!(out, src);
}

#[test]
fn undersized_destination_is_reported() {
    let src = noise(4096);
    let mut dst = vec![0u8; 100];
    assert_eq!(compress_default(&src, &mut dst), Err(Lz4Error::OutputTooSmall));
}

#[test]
fn acceleration_trades_ratio() {
    let src: Vec<u8> = text(50_000)
        .into_iter()
        .zip(noise(50_000))
        .map(|(t, n)| if n < 16 { n } else { t })
        .collect();
    let mut slow = vec![0u8; compress_bound(src.len())];
    let mut quick = vec![0u8; compress_bound(src.len())];
    let n_slow = compress_fast(&src, &mut slow, 1).unwrap();
    let n_quick = compress_fast(&src, &mut quick, LZ4_ACCELERATION_MAX).unwrap();
    assert!(n_slow <= n_quick);
    assert_eq!(decompress_to_vec(&quick[..n_quick], src.len()).unwrap(), src);
}

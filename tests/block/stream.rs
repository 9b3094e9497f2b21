// Integration tests for the fast continuation state (`Lz4Stream`).

use lz4stream::block::{compress_bound, decompress_with_prefix, Lz4Stream, HISTORY_SIZE};

fn decode_at(buf_history: &[u8], block: &[u8], len: usize) -> Vec<u8> {
    let mut buf = buf_history.to_vec();
    buf.resize(buf_history.len() + len, 0);
    let n = decompress_with_prefix(block, &mut buf, buf_history.len()).unwrap();
    buf[buf_history.len()..buf_history.len() + n].to_vec()
}

#[test]
fn second_block_uses_first_as_history() {
    let mut stream = Lz4Stream::new();
    let phrase = b"a fairly long phrase that will repeat in the next block. ";
    let mut arena = vec![0u8; 4096];
    arena[..phrase.len()].copy_from_slice(phrase);
    arena[phrase.len()..2 * phrase.len()].copy_from_slice(phrase);
    let mid = phrase.len();
    let end = 2 * phrase.len();

    let mut dst = vec![0u8; compress_bound(phrase.len())];
    let first = stream.compress_continue(&arena, 0, mid, &mut dst).unwrap();
    assert!(first > phrase.len() / 2);
    let second = stream.compress_continue(&arena, mid, end, &mut dst).unwrap();
    assert!(second < 16, "second block should be one long match, got {second} bytes");
    assert_eq!(decode_at(&arena[..mid], &dst[..second], phrase.len()), phrase);
}

#[test]
fn slide_keeps_last_window() {
    let mut stream = Lz4Stream::new();
    let mut arena: Vec<u8> = (0..3 * HISTORY_SIZE).map(|i| (i % 251) as u8).collect();
    let mut dst = vec![0u8; compress_bound(2 * HISTORY_SIZE)];
    stream
        .compress_continue(&arena, 0, 2 * HISTORY_SIZE, &mut dst)
        .unwrap();

    let expected = arena[HISTORY_SIZE..2 * HISTORY_SIZE].to_vec();
    let kept = stream.slide(&mut arena, 2 * HISTORY_SIZE);
    assert_eq!(kept, HISTORY_SIZE);
    assert_eq!(&arena[..HISTORY_SIZE], &expected[..]);

    // Continue the period right after the relocated history.
    let block: Vec<u8> = (2 * HISTORY_SIZE..2 * HISTORY_SIZE + 1000)
        .map(|i| (i % 251) as u8)
        .collect();
    arena[kept..kept + 1000].copy_from_slice(&block);
    let n = stream
        .compress_continue(&arena, kept, kept + 1000, &mut dst)
        .unwrap();
    assert!(n < 100);
    assert_eq!(decode_at(&arena[..kept], &dst[..n], 1000), block);
}

#[test]
fn reset_forgets_history() {
    let data = b"reset should make this compress like the very first block ".repeat(4);
    let mut dst_a = vec![0u8; compress_bound(data.len())];
    let mut dst_b = vec![0u8; compress_bound(data.len())];

    let mut stream = Lz4Stream::new();
    let a = stream.compress_continue(&data, 0, data.len(), &mut dst_a).unwrap();
    stream.reset();
    let b = stream.compress_continue(&data, 0, data.len(), &mut dst_b).unwrap();
    assert_eq!(dst_a[..a], dst_b[..b]);
}

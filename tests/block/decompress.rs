// Integration tests for the block decoder, including hostile input.

use lz4stream::block::{
    compress_to_vec, decompress_safe, decompress_safe_using_dict, decompress_to_vec,
    decompress_with_prefix, DecompressError, HISTORY_SIZE,
};

#[test]
fn literal_only_block() {
    // token: 5 literals, no match
    let block = [0x50, b'h', b'e', b'l', b'l', b'o'];
    assert_eq!(decompress_to_vec(&block, 5).unwrap(), b"hello");
}

#[test]
fn overlapping_match_repeats_pattern() {
    // "ab" then a match of length 8 at offset 2, then one trailing literal
    let block = [0x24, b'a', b'b', 0x02, 0x00, 0x10, b'!'];
    assert_eq!(decompress_to_vec(&block, 64).unwrap(), b"ababababab!");
}

#[test]
fn truncated_and_empty_inputs_are_malformed() {
    let packed = compress_to_vec(&[42u8; 1000]).unwrap();
    let mut out = vec![0u8; 1000];
    assert_eq!(
        decompress_safe(&packed[..packed.len() - 1], &mut out),
        Err(DecompressError::MalformedInput)
    );
    assert_eq!(decompress_safe(&[], &mut out), Err(DecompressError::MalformedInput));
}

#[test]
fn offset_before_start_is_malformed() {
    // one literal then a match 5 bytes back
    let block = [0x10, b'x', 0x05, 0x00, 0x00];
    assert!(decompress_to_vec(&block, 64).is_err());
}

#[test]
fn output_bound_is_enforced() {
    let packed = compress_to_vec(&[7u8; 500]).unwrap();
    assert!(decompress_to_vec(&packed, 499).is_err());
    assert_eq!(decompress_to_vec(&packed, 500).unwrap().len(), 500);
}

#[test]
fn prefix_history_is_reachable() {
    // one literal, then copy 8 bytes from 4 back (into the prefix), then 'z'
    let block = [0x14, b'!', 0x04, 0x00, 0x10, b'z'];
    let mut buf = vec![0u8; 64];
    buf[..3].copy_from_slice(b"abc");
    let n = decompress_with_prefix(&block, &mut buf, 3).unwrap();
    assert_eq!(&buf[3..3 + n], b"!abc!abc!z");
}

#[test]
fn dictionary_longer_than_window_is_trimmed() {
    let mut dict = vec![b'-'; HISTORY_SIZE + 100];
    let tail = dict.len() - 4;
    dict[tail..].copy_from_slice(b"WXYZ");
    // copy the last 4 dictionary bytes twice, then a literal
    let block = [0x04, 0x04, 0x00, 0x10, b'.'];
    let mut out = vec![0u8; 16];
    let n = decompress_safe_using_dict(&block, &mut out, &dict).unwrap();
    assert_eq!(&out[..n], b"WXYZWXYZ.");
}

// Integration tests for `StreamDecoder`.

use lz4stream::block::compress_to_vec;
use lz4stream::stream::{Error, StreamDecoder, StreamEncoder, Variant};
use lz4stream::HISTORY_WINDOW;

#[test]
fn garbage_is_corrupt_data() {
    let mut dec = StreamDecoder::new(None);
    assert_eq!(dec.update(&[0xFF, 0xFF, 0xFF], 1024), Err(Error::CorruptData));
    assert_eq!(dec.update(&[], 1024), Err(Error::ResetRequired));
}

#[test]
fn exact_max_output_is_enough() {
    let block = compress_to_vec(&[9u8; 4096]).unwrap();
    let mut dec = StreamDecoder::default();
    assert_eq!(dec.update(&block, 4096).unwrap().len(), 4096);
}

#[test]
fn independent_blocks_decode_too() {
    // Blocks compressed without shared history are valid stream blocks.
    let mut dec = StreamDecoder::new(None);
    for chunk in [b"first".as_slice(), b"second", b"third"] {
        let block = compress_to_vec(chunk).unwrap();
        assert_eq!(dec.update(&block, 64).unwrap(), chunk);
    }
    assert_eq!(&dec.window()[HISTORY_WINDOW - 16..], b"firstsecondthird");
}

#[test]
fn reset_restores_initial_window() {
    let mut enc = StreamEncoder::new(2048, Variant::Fast, None).unwrap();
    let mut dec = StreamDecoder::new(None);
    let data = b"window contents before reset ".repeat(40);
    let packed = enc.update(&data).unwrap();
    dec.update(&packed, data.len()).unwrap();
    assert!(dec.window().iter().any(|&b| b != 0));

    dec.reset(None);
    assert!(dec.window().iter().all(|&b| b == 0));
    dec.reset(Some(b"xyz".as_slice()));
    assert_eq!(&dec.window()[HISTORY_WINDOW - 3..], b"xyz");
}

#[test]
fn update_into_leaves_dest_empty_on_error() {
    let mut dec = StreamDecoder::new(None);
    let mut dest = b"stale".to_vec();
    assert!(dec.update_into(&[0x30, b'a'], 64, &mut dest).is_err());
    assert!(dest.is_empty());
}

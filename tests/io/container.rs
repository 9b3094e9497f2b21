// Integration tests for `StreamWriter` / `StreamReader`.

use std::io::{self, Read, Write};

use lz4stream::io::{ContainerHeader, StreamReader, StreamWriter, HEADER_SIZE};
use lz4stream::stream::Variant;
use lz4stream::xxhash::xxh32_oneshot;

fn log_lines(n: usize) -> Vec<u8> {
    (0..n)
        .flat_map(|i| format!("2026-10-19T12:{:02}:{:02} INFO request {} ok\n", i / 60 % 60, i % 60, i).into_bytes())
        .collect()
}

fn pack(data: &[u8], block_size: usize, variant: Variant, dict: Option<&[u8]>) -> Vec<u8> {
    let mut w = StreamWriter::new(Vec::new(), block_size, variant, dict).unwrap();
    // odd-sized writes exercise block assembly
    for piece in data.chunks(777) {
        w.write_all(piece).unwrap();
    }
    w.finish().unwrap()
}

fn unpack(packed: &[u8], dict: Option<&[u8]>) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    StreamReader::new(packed, dict)?.read_to_end(&mut out)?;
    Ok(out)
}

#[test]
fn round_trip_both_variants() {
    let data = log_lines(5000);
    for variant in [Variant::Fast, Variant::HighRatio] {
        let packed = pack(&data, 8192, variant, None);
        assert!(packed.len() < data.len() / 2);
        let header = ContainerHeader::read_from(&mut &packed[..]).unwrap();
        assert_eq!(header.variant, variant);
        assert_eq!(header.block_size, 8192);
        assert!(!header.has_dictionary);
        assert_eq!(unpack(&packed, None).unwrap(), data);
    }
}

#[test]
fn trailer_holds_content_checksum() {
    let data = log_lines(100);
    let packed = pack(&data, 1024, Variant::Fast, None);
    let trailer = &packed[packed.len() - 8..];
    assert_eq!(&trailer[..4], &[0, 0, 0, 0]);
    assert_eq!(trailer[4..], xxh32_oneshot(&data, 0).to_le_bytes());
}

#[test]
fn flush_emits_partial_block() {
    let mut w = StreamWriter::new(Vec::new(), 4096, Variant::Fast, None).unwrap();
    w.write_all(b"partial").unwrap();
    w.flush().unwrap();
    assert_eq!(w.total_in(), 7);
    assert!(w.get_ref().len() > HEADER_SIZE);
    let packed = w.finish().unwrap();
    assert_eq!(unpack(&packed, None).unwrap(), b"partial");
}

#[test]
fn dictionary_container() {
    let dict = log_lines(50);
    let data = log_lines(60);
    let packed = pack(&data, 2048, Variant::HighRatio, Some(dict.as_slice()));
    let plain = pack(&data, 2048, Variant::HighRatio, None);
    assert!(packed.len() < plain.len());
    assert_eq!(unpack(&packed, Some(dict.as_slice())).unwrap(), data);
    assert_eq!(
        unpack(&packed, None).unwrap_err().kind(),
        io::ErrorKind::InvalidInput
    );
}

#[test]
fn corrupted_block_is_invalid_data() {
    let data = log_lines(500);
    let mut packed = pack(&data, 4096, Variant::Fast, None);
    // Flip a byte inside the first block payload.
    packed[HEADER_SIZE + 40] ^= 0x5A;
    let err = unpack(&packed, None).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn not_a_container() {
    let err = unpack(b"definitely not lz4s", None).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

//! E2E Test Suite 03: Stream Container
//!
//! Pushes data through `StreamWriter` into an in-memory or on-disk
//! container and reads it back with `StreamReader`, across block sizes,
//! variants, dictionaries and `std::io::copy` plumbing.

use std::io::{self, Cursor, Read, Write};

use lz4stream::io::{ContainerHeader, StreamReader, StreamWriter, HEADER_SIZE};
use lz4stream::stream::Variant;

fn mixed(len: usize) -> Vec<u8> {
    let mut x = 0x0123_4567_89AB_CDEFu64;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        match x % 4 {
            0 => out.extend_from_slice(b"GET /index.html HTTP/1.1\r\n"),
            1 => out.extend_from_slice(b"Host: example.org\r\n"),
            2 => out.extend_from_slice(&x.to_le_bytes()),
            _ => out.push(b'\n'),
        }
    }
    out.truncate(len);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: block sizes × variants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_block_size_matrix() {
    let data = mixed(300_000);
    for &block_size in &[1usize, 4_096, 65_536, 262_144] {
        for variant in [Variant::Fast, Variant::HighRatio] {
            if block_size == 1 && variant == Variant::HighRatio {
                continue; // one-byte blocks only need one pass
            }
            let sample = if block_size == 1 { &data[..2_000] } else { &data[..] };
            let mut w = StreamWriter::new(Vec::new(), block_size, variant, None).unwrap();
            w.write_all(sample).unwrap();
            let packed = w.finish().unwrap();

            let mut out = Vec::new();
            StreamReader::new(&packed[..], None)
                .unwrap()
                .read_to_end(&mut out)
                .unwrap();
            assert_eq!(out, sample, "block size {block_size}, {variant:?}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: io::copy both ways through a file
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_io_copy_through_file() {
    let data = mixed(500_000);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.lz4s");

    let file = std::fs::File::create(&path).unwrap();
    let mut w = StreamWriter::new(file, 100_000, Variant::Fast, None).unwrap();
    io::copy(&mut Cursor::new(&data), &mut w).unwrap();
    assert_eq!(w.total_in(), 500_000);
    w.finish().unwrap();

    let mut r = StreamReader::new(std::fs::File::open(&path).unwrap(), None).unwrap();
    assert_eq!(r.header().block_size, 100_000);
    let mut out = Vec::new();
    io::copy(&mut r, &mut out).unwrap();
    assert_eq!(out, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: header fields and framing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_header_and_framing() {
    let data = mixed(10_000);
    let dict = mixed(1_000);
    let mut w = StreamWriter::new(Vec::new(), 4_000, Variant::HighRatio, Some(dict.as_slice())).unwrap();
    w.write_all(&data).unwrap();
    let packed = w.finish().unwrap();

    let header = ContainerHeader::read_from(&mut &packed[..]).unwrap();
    assert_eq!(header.variant, Variant::HighRatio);
    assert!(header.has_dictionary);
    assert_eq!(header.block_size, 4_000);

    // Walk the length-prefixed blocks: 4000 + 4000 + 2000, then the end mark.
    let mut pos = HEADER_SIZE;
    let mut blocks = 0;
    loop {
        let len = u32::from_le_bytes(packed[pos..pos + 4].try_into().unwrap()) as usize;
        pos += 4;
        if len == 0 {
            break;
        }
        pos += len;
        blocks += 1;
    }
    assert_eq!(blocks, 3);
    assert_eq!(pos + 4, packed.len());
}

#[test]
fn test_truncated_container_is_an_error() {
    let data = mixed(50_000);
    let mut w = StreamWriter::new(Vec::new(), 8_192, Variant::Fast, None).unwrap();
    w.write_all(&data).unwrap();
    let packed = w.finish().unwrap();

    for cut in [HEADER_SIZE - 1, HEADER_SIZE + 2, packed.len() / 2, packed.len() - 1] {
        let result = StreamReader::new(&packed[..cut], None).and_then(|mut r| {
            let mut out = Vec::new();
            r.read_to_end(&mut out).map(|_| out)
        });
        assert!(result.is_err(), "cut at {cut} should fail");
    }
}

// Integration tests for the file-level compress/decompress helpers.

use lz4stream::io::{compress_filename, decompress_filename, Prefs};
use lz4stream::stream::Variant;

#[test]
fn compress_then_decompress_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.bin");
    let packed = dir.path().join("input.bin.lz4s");
    let restored = dir.path().join("restored.bin");
    let data: Vec<u8> = (0..300_000u32).map(|i| ((i / 3) % 200) as u8).collect();
    std::fs::write(&src, &data).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_block_size(32 * 1024);
    let stats = compress_filename(src.to_str().unwrap(), packed.to_str().unwrap(), &prefs).unwrap();
    assert_eq!(stats.bytes_in, data.len() as u64);

    let stats =
        decompress_filename(packed.to_str().unwrap(), restored.to_str().unwrap(), &prefs).unwrap();
    assert_eq!(stats.bytes_out, data.len() as u64);
    assert_eq!(std::fs::read(&restored).unwrap(), data);
}

#[test]
fn variant_is_read_from_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a");
    let packed = dir.path().join("a.lz4s");
    let restored = dir.path().join("b");
    std::fs::write(&src, b"high ratio container ".repeat(1000)).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_variant(Variant::HighRatio);
    compress_filename(src.to_str().unwrap(), packed.to_str().unwrap(), &prefs).unwrap();

    // Decompression ignores the configured variant.
    let fast = Prefs::default();
    decompress_filename(packed.to_str().unwrap(), restored.to_str().unwrap(), &fast).unwrap();
    assert_eq!(std::fs::read(&restored).unwrap(), std::fs::read(&src).unwrap());
}

#[test]
fn missing_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never");
    let prefs = Prefs::default();
    assert!(compress_filename("/nonexistent/lz4s/src", out.to_str().unwrap(), &prefs).is_err());
    assert!(!out.exists());
}

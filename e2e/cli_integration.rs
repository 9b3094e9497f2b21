//! E2E Test Suite 05: CLI Integration
//!
//! Runs the `lz4s` binary as a black box with std::process::Command:
//! compress/decompress dispatch, output naming, overwrite protection,
//! dictionaries, the block size environment variable, and exit codes.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn lz4s_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4s"))
}

fn sample_text() -> Vec<u8> {
    (0..4000)
        .flat_map(|i| format!("line {i}: streaming blocks share a sliding window\n").into_bytes())
        .collect()
}

fn temp_input() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, sample_text()).unwrap();
    (dir, path)
}

fn run<S: AsRef<OsStr>>(args: &[S]) -> std::process::Output {
    Command::new(lz4s_bin()).args(args).output().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: derived names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_and_decompress_with_derived_names() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("input.txt.lz4s");

    let out = run(&[&input]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(packed.exists());
    assert!(fs::metadata(&packed).unwrap().len() < fs::metadata(&input).unwrap().len());

    // `.lz4s` input selects decompression and strips the extension.
    fs::remove_file(&input).unwrap();
    let out = run(&[&packed]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&input).unwrap(), sample_text());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: overwrite protection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_refuses_to_overwrite_without_force() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("input.txt.lz4s");
    fs::write(&packed, b"precious").unwrap();

    let out = run(&[&input]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
    assert_eq!(fs::read(&packed).unwrap(), b"precious");

    let out = Command::new(lz4s_bin())
        .arg("-f")
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_ne!(fs::read(&packed).unwrap(), b"precious");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: stdin to stdout, high ratio, explicit block size
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_pipe_round_trip() {
    let data = sample_text();
    let mut child = Command::new(lz4s_bin())
        .args(["-9", "-B", "16K", "-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&data).unwrap();
    let packed = child.wait_with_output().unwrap();
    assert!(packed.status.success());
    assert_eq!(&packed.stdout[..4], b"LZ4S");
    assert_eq!(packed.stdout[5] & 0x01, 0x01);
    assert_eq!(&packed.stdout[6..10], &16_384u32.to_le_bytes());

    let mut child = Command::new(lz4s_bin())
        .args(["-d", "-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&packed.stdout).unwrap();
    let restored = child.wait_with_output().unwrap();
    assert!(restored.status.success());
    assert_eq!(restored.stdout, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: dictionary and environment block size
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_dictionary_and_env_block_size() {
    let (dir, input) = temp_input();
    let dict = dir.path().join("dict.bin");
    let packed = dir.path().join("packed.lz4s");
    let restored = dir.path().join("restored.txt");
    fs::write(&dict, &sample_text()[..2048]).unwrap();

    let out = Command::new(lz4s_bin())
        .env("LZ4S_BLOCKSIZE", "32K")
        .arg("-D")
        .arg(&dict)
        .arg(&input)
        .arg(&packed)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let header = fs::read(&packed).unwrap();
    assert_eq!(&header[6..10], &32_768u32.to_le_bytes());
    assert_eq!(header[5] & 0x02, 0x02);

    // Without the dictionary decompression fails.
    let out = run(&[&packed, &restored]);
    assert_eq!(out.status.code(), Some(1));

    let out = Command::new(lz4s_bin())
        .arg("-D")
        .arg(&dict)
        .arg("-f")
        .arg(&packed)
        .arg(&restored)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&restored).unwrap(), sample_text());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: failures exit with status 1
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_input_and_corrupt_container() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let out = run(&[&missing]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("lz4s"));

    let bogus = dir.path().join("bogus.lz4s");
    fs::write(&bogus, b"this is not a container").unwrap();
    let out = run(&[&bogus]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_bad_block_size_flag_is_a_usage_error() {
    let out = Command::new(lz4s_bin())
        .args(["-B", "huge", "-", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!out.status.success());
}

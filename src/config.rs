// config.rs: compile-time configuration constants.
//
// Sizes shared by the streaming sessions, the container format and the CLI.
// Runtime overrides (environment variables, command-line flags) are resolved
// in `cli::op_mode` and never mutate these values.

use crate::block::types::{HISTORY_SIZE, KB};

// History window carried between consecutive blocks of a session.
// Equals the maximum back-reference distance of the block format plus one,
// so every reachable byte of earlier plaintext is retained.
pub const HISTORY_WINDOW: usize = HISTORY_SIZE;

// Minimum arena capacity of an encoder session (3 × HISTORY_WINDOW).
// Small block-size hints still get enough room to defer slides.
pub const BUFFER_FLOOR: usize = 3 * HISTORY_WINDOW;

// Default block size used by the container writer and the CLI.
// Can be overridden by the LZ4S_BLOCKSIZE environment variable at runtime,
// or by the -B command-line flag.
pub const BLOCK_SIZE_DEFAULT: usize = 256 * KB;

// Default decompression bound for headerless one-shot blocks (16 MiB).
pub const DECODE_LIMIT_DEFAULT: usize = 1 << 24;

// Compression level used by the high-ratio variant unless configured otherwise.
pub const HC_CLEVEL_DEFAULT: i32 = crate::hc::LZ4HC_CLEVEL_DEFAULT;

// Environment variable consulted for the default block size.
pub const ENV_BLOCKSIZE: &str = "LZ4S_BLOCKSIZE";

// File extension appended on compression and stripped on decompression.
pub const LZ4S_EXTENSION: &str = ".lz4s";

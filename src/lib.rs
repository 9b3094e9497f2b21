// lz4stream: streaming LZ4 sessions with a sliding history window

pub mod block;
pub mod cli;
pub mod config;
pub mod display;
pub mod hc;
pub mod io;
pub mod oneshot;
pub mod stream;
pub mod xxhash;

// ── Version constants ─────────────────────────────────────────────────────────
pub const LZ4S_VERSION_MAJOR: u32 = 0;
pub const LZ4S_VERSION_MINOR: u32 = 1;
pub const LZ4S_VERSION_RELEASE: u32 = 0;
pub const LZ4S_VERSION_NUMBER: u32 =
    LZ4S_VERSION_MAJOR * 100 * 100 + LZ4S_VERSION_MINOR * 100 + LZ4S_VERSION_RELEASE;
pub const LZ4S_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    LZ4S_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    LZ4S_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::compress_bound;
pub use config::{BUFFER_FLOOR, HISTORY_WINDOW};
pub use stream::{Error, Handle, PresetDictionary, StreamDecoder, StreamEncoder, Variant};

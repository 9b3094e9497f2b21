//! Stream container I/O.
//!
//! A container is a small header followed by the blocks of one encoder
//! session, each prefixed by its compressed length, then an end mark and a
//! content checksum.  See [`header`] for the exact layout.

pub mod file_io;
pub mod header;
pub mod prefs;
pub mod reader;
pub mod transcode;
pub mod writer;

pub use header::{ContainerHeader, HEADER_SIZE, LZ4S_MAGIC, LZ4S_VERSION};
pub use prefs::Prefs;
pub use reader::StreamReader;
pub use writer::StreamWriter;

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{STDIN_MARK, STDOUT_MARK};

// ── File-level API ───────────────────────────────────────────────────────────
pub use transcode::{compress_filename, decompress_filename, TranscodeStats};

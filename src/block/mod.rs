//! LZ4 block compression and decompression (fast variant).
//!
//! The codec works on plain slices and byte offsets.  The continuation state
//! in [`stream`] keeps its history as offsets into a caller-owned arena, so a
//! session can relocate that history without invalidating the match table.

pub mod compress;
pub mod decompress;
pub(crate) mod encode;
pub mod stream;
pub mod types;

pub use compress::{
    compress_default, compress_fast, compress_to_vec, Lz4Error, LZ4_ACCELERATION_DEFAULT,
    LZ4_ACCELERATION_MAX, LZ4_MAX_INPUT_SIZE,
};
pub use decompress::{
    decompress_safe, decompress_safe_using_dict, decompress_to_vec, decompress_with_prefix,
    DecompressError,
};
pub use stream::Lz4Stream;
pub use types::{compress_bound, HISTORY_SIZE, LZ4_DISTANCE_MAX};

//! LZ4 HC (high-compression) block codec.
//!
//! Produces standard LZ4 blocks, decodable by [`crate::block::decompress`],
//! trading compression speed for ratio through a hash-chain search.

pub mod api;
pub mod compress_hc;
pub mod search;
pub mod types;

pub use api::{compress_hc, compress_hc_into, Lz4StreamHc};
pub use types::{LZ4HC_CLEVEL_DEFAULT, LZ4HC_CLEVEL_MAX, LZ4HC_CLEVEL_MIN};

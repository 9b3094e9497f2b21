//! Streaming encoder and decoder sessions with cross-block history.
//!
//! An encoder compresses bounded blocks one at a time; each block may
//! reference up to [`crate::config::HISTORY_WINDOW`] bytes of the plaintext
//! that preceded it.  A decoder fed the same blocks in the same order
//! restores the plaintext.
//!
//! ```
//! use lz4stream::stream::{StreamDecoder, StreamEncoder, Variant};
//!
//! let mut enc = StreamEncoder::new(1024, Variant::Fast, None).unwrap();
//! let mut dec = StreamDecoder::new(None);
//! let block = b"ABCD".repeat(256);
//! for _ in 0..3 {
//!     let packed = enc.update(&block).unwrap();
//!     assert_eq!(dec.update(&packed, 1024).unwrap(), block);
//! }
//! ```

pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod handle;

pub use decoder::StreamDecoder;
pub use dictionary::PresetDictionary;
pub use encoder::{StreamEncoder, Variant};
pub use error::{Error, Result};
pub use handle::Handle;

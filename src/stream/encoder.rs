//! Streaming encoder session.
//!
//! The session owns one arena laid out as
//!
//! ```text
//!   0                cursor                              tail (= capacity)
//!   | history ...    | next block goes here ...          |
//! ```
//!
//! Each `update` copies the block to `cursor` and asks the continuation
//! codec to compress `[cursor, cursor + len)` with everything before it as
//! history.  When the block no longer fits before `tail`, the codec's own
//! `slide` moves the last [`HISTORY_WINDOW`] bytes to the arena start and
//! rebases its tables; the cursor then continues right after them.
//!
//! Cursor and tail are offsets, so a `reset` that reallocates the arena has
//! nothing to patch up.

use crate::block::compress::LZ4_MAX_INPUT_SIZE;
use crate::block::types::compress_bound;
use crate::block::Lz4Stream;
use crate::config::{BUFFER_FLOOR, HC_CLEVEL_DEFAULT, HISTORY_WINDOW};
use crate::displaylevel;
use crate::hc::Lz4StreamHc;

use super::dictionary::PresetDictionary;
use super::error::{Error, Result};

/// Compressor family used by an encoder session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Greedy hash-table matching.
    #[default]
    Fast,
    /// Hash-chain matching at the default HC level.
    HighRatio,
}

// ─────────────────────────────────────────────────────────────────────────────
// Continuation state
// ─────────────────────────────────────────────────────────────────────────────

/// Codec continuation state, one variant per compressor family.
pub(crate) enum Continuation {
    Fast(Box<Lz4Stream>),
    HighRatio(Box<Lz4StreamHc>),
}

impl Continuation {
    fn new(variant: Variant) -> Self {
        match variant {
            Variant::Fast => Continuation::Fast(Lz4Stream::new()),
            Variant::HighRatio => Continuation::HighRatio(Lz4StreamHc::with_level(HC_CLEVEL_DEFAULT)),
        }
    }

    fn variant(&self) -> Variant {
        match self {
            Continuation::Fast(_) => Variant::Fast,
            Continuation::HighRatio(_) => Variant::HighRatio,
        }
    }

    fn reset(&mut self) {
        match self {
            Continuation::Fast(s) => s.reset(),
            Continuation::HighRatio(s) => s.reset(),
        }
    }

    fn compress_continue(
        &mut self,
        buf: &[u8],
        start: usize,
        end: usize,
        dst: &mut [u8],
    ) -> Result<usize> {
        let produced = match self {
            Continuation::Fast(s) => s.compress_continue(buf, start, end, dst),
            Continuation::HighRatio(s) => s.compress_continue(buf, start, end, dst),
        };
        produced.map_err(Error::from)
    }

    fn slide(&mut self, buf: &mut [u8], cursor: usize) -> usize {
        match self {
            Continuation::Fast(s) => s.slide(buf, cursor),
            Continuation::HighRatio(s) => s.slide(buf, cursor),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Arena capacity for a block-size hint, after validating the hint.
fn capacity_for(block_size: usize) -> Result<usize> {
    if block_size == 0 || block_size > LZ4_MAX_INPUT_SIZE {
        return Err(Error::InvalidArgument);
    }
    Ok((block_size + HISTORY_WINDOW).max(BUFFER_FLOOR))
}

/// Compresses a sequence of blocks, each able to reference the plaintext
/// of the blocks before it.
pub struct StreamEncoder {
    codec: Continuation,
    buffer: Vec<u8>,
    cursor: usize,
    failed: bool,
}

impl StreamEncoder {
    /// Create a session accepting blocks of up to `block_size` bytes.
    ///
    /// With a dictionary, its trailing 64 KiB become the history of the
    /// first block.
    pub fn new(block_size: usize, variant: Variant, dictionary: Option<&[u8]>) -> Result<Self> {
        let capacity = capacity_for(block_size)?;
        let mut encoder = Self {
            codec: Continuation::new(variant),
            buffer: vec![0u8; capacity],
            cursor: 0,
            failed: false,
        };
        encoder.apply_dictionary(PresetDictionary::from(dictionary))?;
        displaylevel!(
            4,
            "stream encoder: capacity {} bytes, block size {}, {:?}\n",
            capacity,
            encoder.block_size(),
            variant
        );
        Ok(encoder)
    }

    /// Largest block `update` accepts.
    pub fn block_size(&self) -> usize {
        self.buffer.len() - HISTORY_WINDOW
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn variant(&self) -> Variant {
        self.codec.variant()
    }

    /// Offset of the next block inside the arena.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Compress one block with the default output bound.
    pub fn update(&mut self, block: &[u8]) -> Result<Vec<u8>> {
        let mut dest = Vec::new();
        self.update_into(block, &mut dest, None)?;
        Ok(dest)
    }

    /// Compress one block, failing with [`Error::CodecFailure`] if the
    /// result would exceed `max_output` bytes.
    pub fn update_bounded(&mut self, block: &[u8], max_output: usize) -> Result<Vec<u8>> {
        let mut dest = Vec::new();
        self.update_into(block, &mut dest, Some(max_output))?;
        Ok(dest)
    }

    /// Compress one block into `dest`, replacing its contents.
    ///
    /// Returns the compressed length; on error `dest` is left empty.
    pub fn update_into(
        &mut self,
        block: &[u8],
        dest: &mut Vec<u8>,
        max_output: Option<usize>,
    ) -> Result<usize> {
        dest.clear();
        if self.failed {
            return Err(Error::ResetRequired);
        }
        if block.len() > self.block_size() {
            return Err(Error::BufferOverflow);
        }

        if self.buffer.len() - self.cursor < block.len() {
            let cursor = self.codec.slide(&mut self.buffer, self.cursor);
            displaylevel!(4, "stream encoder: slide {} -> {}\n", self.cursor, cursor);
            self.cursor = cursor;
        }

        let start = self.cursor;
        let end = start + block.len();
        self.buffer[start..end].copy_from_slice(block);

        dest.resize(max_output.unwrap_or_else(|| compress_bound(block.len())), 0);
        match self.codec.compress_continue(&self.buffer, start, end, dest) {
            Ok(n) => {
                dest.truncate(n);
                self.cursor = end;
                Ok(n)
            }
            Err(err) => {
                dest.clear();
                self.failed = true;
                displaylevel!(3, "stream encoder: block at {} failed: {}\n", start, err);
                Err(err)
            }
        }
    }

    /// Reinitialise the session.
    ///
    /// `block_size` of `None` or `Some(0)` keeps the arena; another size
    /// reallocates it when the derived capacity changes.  A different
    /// `variant` replaces the codec state.  History is always discarded and
    /// the dictionary (if any) applied as in [`StreamEncoder::new`].
    pub fn reset(
        &mut self,
        block_size: Option<usize>,
        variant: Option<Variant>,
        dictionary: Option<&[u8]>,
    ) -> Result<&mut Self> {
        let capacity = match block_size {
            None | Some(0) => self.buffer.len(),
            Some(size) => capacity_for(size)?,
        };

        if capacity != self.buffer.len() {
            self.buffer = vec![0u8; capacity];
        }
        match variant {
            Some(v) if v != self.codec.variant() => self.codec = Continuation::new(v),
            _ => self.codec.reset(),
        }

        let zeroed = BUFFER_FLOOR.min(self.buffer.len());
        self.buffer[..zeroed].fill(0);
        self.cursor = 0;
        self.failed = false;
        displaylevel!(
            4,
            "stream encoder: reset, capacity {} bytes, {:?}\n",
            self.buffer.len(),
            self.codec.variant()
        );

        self.apply_dictionary(PresetDictionary::from(dictionary))?;
        Ok(self)
    }

    /// Seed the window and warm the codec with one throwaway pass over it.
    fn apply_dictionary(&mut self, dictionary: PresetDictionary<'_>) -> Result<()> {
        if dictionary.is_zeroed() {
            return Ok(());
        }
        dictionary.seed(&mut self.buffer[..HISTORY_WINDOW]);

        let mut scratch = vec![0u8; compress_bound(HISTORY_WINDOW)];
        if let Err(err) = self.codec.compress_continue(&self.buffer, 0, HISTORY_WINDOW, &mut scratch) {
            self.failed = true;
            return Err(err);
        }
        self.cursor = HISTORY_WINDOW;
        Ok(())
    }
}

//! Streaming decoder session.
//!
//! The decoder keeps a fixed [`HISTORY_WINDOW`]-byte window of the most
//! recent plaintext.  Each block is decoded into a scratch arena laid out as
//! `window ‖ output`, so back-references into earlier blocks resolve against
//! the window prefix.  Afterwards the window becomes the trailing
//! `HISTORY_WINDOW` bytes of that same arena: for a block of at least the
//! window size this is the tail of the block itself, for a shorter block the
//! older window content shifts left to make room.

use crate::block::decompress_with_prefix;
use crate::config::HISTORY_WINDOW;
use crate::displaylevel;

use super::dictionary::PresetDictionary;
use super::error::{Error, Result};

/// Decodes the blocks produced by a [`super::StreamEncoder`], in order.
pub struct StreamDecoder {
    window: Box<[u8]>,
    scratch: Vec<u8>,
    failed: bool,
}

impl StreamDecoder {
    /// Create a session whose window is seeded from `dictionary`, or zeroed.
    pub fn new(dictionary: Option<&[u8]>) -> Self {
        let mut window = vec![0u8; HISTORY_WINDOW].into_boxed_slice();
        PresetDictionary::from(dictionary).seed(&mut window);
        Self {
            window,
            scratch: Vec::new(),
            failed: false,
        }
    }

    /// The current history window (always [`HISTORY_WINDOW`] bytes).
    pub fn window(&self) -> &[u8] {
        &self.window
    }

    /// Decode one block producing at most `max_output` bytes.
    pub fn update(&mut self, block: &[u8], max_output: usize) -> Result<Vec<u8>> {
        let mut dest = Vec::new();
        self.update_into(block, max_output, &mut dest)?;
        Ok(dest)
    }

    /// Decode one block into `dest`, replacing its contents.
    ///
    /// Returns the decoded length.  Malformed input and an output larger than
    /// `max_output` both report [`Error::CorruptData`]; after either, the
    /// session refuses further blocks until [`StreamDecoder::reset`].
    pub fn update_into(
        &mut self,
        block: &[u8],
        max_output: usize,
        dest: &mut Vec<u8>,
    ) -> Result<usize> {
        dest.clear();
        if self.failed {
            return Err(Error::ResetRequired);
        }
        let arena_len = HISTORY_WINDOW
            .checked_add(max_output)
            .ok_or(Error::InvalidArgument)?;

        self.scratch.clear();
        self.scratch.extend_from_slice(&self.window);
        self.scratch.resize(arena_len, 0);

        let n = match decompress_with_prefix(block, &mut self.scratch, HISTORY_WINDOW) {
            Ok(n) => n,
            Err(err) => {
                self.failed = true;
                displaylevel!(3, "stream decoder: {} ({} byte block)\n", err, block.len());
                return Err(Error::from(err));
            }
        };

        self.window.copy_from_slice(&self.scratch[n..n + HISTORY_WINDOW]);
        dest.extend_from_slice(&self.scratch[HISTORY_WINDOW..HISTORY_WINDOW + n]);
        Ok(n)
    }

    /// Restore a fresh window (zeroed or seeded) and clear any failure.
    pub fn reset(&mut self, dictionary: Option<&[u8]>) -> &mut Self {
        PresetDictionary::from(dictionary).seed(&mut self.window);
        self.failed = false;
        displaylevel!(4, "stream decoder: reset\n");
        self
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new(None)
    }
}

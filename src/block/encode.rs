//! Sequence encoder shared by the fast and high-ratio compressors.
//!
//! [`SequenceWriter`] serialises LZ4 sequences (token byte, literal-length
//! extension, literals, 16-bit offset, match-length extension) into a
//! bounded output slice.  Every write is checked against the slice end, so a
//! too-small destination surfaces as [`Lz4Error::OutputTooSmall`] instead of
//! a truncated block.

use super::compress::Lz4Error;
use super::types::{LZ4_DISTANCE_MAX, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

/// Bounded writer for one LZ4 block.
pub struct SequenceWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> SequenceWriter<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    /// Bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    fn reserve(&self, needed: usize) -> Result<(), Lz4Error> {
        if needed > self.dst.len() - self.pos {
            Err(Lz4Error::OutputTooSmall)
        } else {
            Ok(())
        }
    }

    /// Write the 255-run extension for a length that overflowed its nibble.
    #[inline]
    fn push_length(&mut self, mut remaining: usize) {
        while remaining >= 255 {
            self.dst[self.pos] = 255;
            self.pos += 1;
            remaining -= 255;
        }
        self.dst[self.pos] = remaining as u8;
        self.pos += 1;
    }

    #[inline]
    fn push_literals(&mut self, literals: &[u8]) -> usize {
        let token_pos = self.pos;
        let run = literals.len();
        self.pos += 1;
        if run >= RUN_MASK as usize {
            self.dst[token_pos] = (RUN_MASK << ML_BITS) as u8;
            self.push_length(run - RUN_MASK as usize);
        } else {
            self.dst[token_pos] = (run << ML_BITS) as u8;
        }
        self.dst[self.pos..self.pos + run].copy_from_slice(literals);
        self.pos += run;
        token_pos
    }

    /// Emit one sequence: `literals` followed by a back-reference of
    /// `match_length` bytes at distance `offset`.
    pub fn sequence(
        &mut self,
        literals: &[u8],
        offset: usize,
        match_length: usize,
    ) -> Result<(), Lz4Error> {
        debug_assert!(offset > 0 && offset <= LZ4_DISTANCE_MAX);
        debug_assert!(match_length >= MINMATCH);

        let run = literals.len();
        let ml = match_length - MINMATCH;
        // token + literal extension + literals + offset + match extension
        let needed = 1 + run / 255 + 1 + run + 2 + ml / 255 + 1;
        self.reserve(needed)?;

        let token_pos = self.push_literals(literals);
        self.dst[self.pos..self.pos + 2].copy_from_slice(&(offset as u16).to_le_bytes());
        self.pos += 2;

        if ml >= ML_MASK as usize {
            self.dst[token_pos] |= ML_MASK as u8;
            self.push_length(ml - ML_MASK as usize);
        } else {
            self.dst[token_pos] |= ml as u8;
        }
        Ok(())
    }

    /// Emit the final literal-only sequence that closes the block.
    pub fn last_literals(&mut self, literals: &[u8]) -> Result<(), Lz4Error> {
        let run = literals.len();
        self.reserve(1 + run / 255 + 1 + run)?;
        self.push_literals(literals);
        Ok(())
    }
}

//! Public HC API: one-shot compression and the streaming HC context.
//!
//! [`Lz4StreamHc`] mirrors [`crate::block::Lz4Stream`]: it compresses
//! successive regions of a caller-owned arena, keeps positions as indices
//! relative to a movable delta, and exposes the same `slide` primitive.
//!
//! # API
//! - [`compress_hc`] / [`compress_hc_into`]
//! - [`Lz4StreamHc::new`], [`Lz4StreamHc::reset`],
//!   [`Lz4StreamHc::set_compression_level`]
//! - [`Lz4StreamHc::compress_continue`], [`Lz4StreamHc::slide`]

use super::compress_hc::compress_hash_chain;
use super::search::ChainTables;
use super::types::{get_clevel_params, normalize_level, LZ4HC_CLEVEL_DEFAULT};
use crate::block::compress::{Lz4Error, LZ4_MAX_INPUT_SIZE};
use crate::block::stream::renorm_shift;
use crate::block::types::{compress_bound, HISTORY_SIZE, INDEX_BASE, INDEX_RENORM_THRESHOLD};

/// Streaming HC compression context.
pub struct Lz4StreamHc {
    pub(crate) tables: ChainTables,
    pub(crate) index_delta: u32,
    pub(crate) history_start: usize,
    pub(crate) history_end: usize,
    compression_level: i32,
}

impl Lz4StreamHc {
    /// Allocate a fresh HC context at the default level (9).
    pub fn new() -> Box<Self> {
        Self::with_level(LZ4HC_CLEVEL_DEFAULT)
    }

    /// Allocate a fresh HC context at `compression_level` (clamped to 1..=12).
    pub fn with_level(compression_level: i32) -> Box<Self> {
        Box::new(Self {
            tables: ChainTables::new(INDEX_BASE),
            index_delta: INDEX_BASE,
            history_start: 0,
            history_end: 0,
            compression_level: normalize_level(compression_level),
        })
    }

    pub fn compression_level(&self) -> i32 {
        self.compression_level
    }

    pub fn set_compression_level(&mut self, compression_level: i32) {
        self.compression_level = normalize_level(compression_level);
    }

    /// Drop all history and re-anchor at arena offset 0. The level is kept.
    pub fn reset(&mut self) {
        self.tables.clear(INDEX_BASE);
        self.index_delta = INDEX_BASE;
        self.history_start = 0;
        self.history_end = 0;
    }

    #[inline]
    fn index_of(&self, pos: usize) -> u32 {
        self.index_delta + pos as u32
    }

    /// Compress `buf[start..end]` into `dst`, referencing up to 64 KiB of
    /// history before `start` when `start` continues the previous block.
    pub fn compress_continue(
        &mut self,
        buf: &[u8],
        start: usize,
        end: usize,
        dst: &mut [u8],
    ) -> Result<usize, Lz4Error> {
        if start != self.history_end {
            self.history_start = start;
            self.tables.next_to_update = self.index_of(start);
        }
        let low = self.history_start.max(start.saturating_sub(HISTORY_SIZE));

        let result = compress_hash_chain(
            &mut self.tables,
            self.index_delta,
            buf,
            low,
            start,
            end,
            get_clevel_params(self.compression_level),
            dst,
        );
        self.history_end = end;
        result
    }

    /// Relocate the trailing (up to) 64 KiB before `cursor` to the start of
    /// `buf` and rebase. Returns the new cursor.
    pub fn slide(&mut self, buf: &mut [u8], cursor: usize) -> usize {
        let kept = cursor.saturating_sub(self.history_start).min(HISTORY_SIZE);
        let from = cursor - kept;
        buf.copy_within(from..cursor, 0);

        self.index_delta += from as u32;
        self.tables.next_to_update = self.tables.next_to_update.max(self.index_delta);
        self.history_start = 0;
        self.history_end = kept;
        if self.index_delta > INDEX_RENORM_THRESHOLD {
            let shift = renorm_shift(self.index_delta);
            self.tables.renormalize(shift);
            self.index_delta -= shift;
        }
        kept
    }
}

/// Compress `src` into `dst` at `compression_level`, returning the length.
pub fn compress_hc_into(
    src: &[u8],
    dst: &mut [u8],
    compression_level: i32,
) -> Result<usize, Lz4Error> {
    let mut stream = Lz4StreamHc::with_level(compression_level);
    stream.compress_continue(src, 0, src.len(), dst)
}

/// Compress `src` into a freshly allocated, exactly-sized vector.
pub fn compress_hc(src: &[u8], compression_level: i32) -> Result<Vec<u8>, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = compress_hc_into(src, &mut dst, compression_level)?;
    dst.truncate(n);
    Ok(dst)
}

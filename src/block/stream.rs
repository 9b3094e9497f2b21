//! LZ4 streaming compression state (fast variant).
//!
//! An [`Lz4Stream`] compresses consecutive regions of a caller-owned arena,
//! letting each block reference up to 64 KiB of the bytes compressed before
//! it.  The stream never stores addresses: hash-table slots hold *indices*,
//! and `index_delta` is the index of arena offset 0.  Moving the history
//! inside the arena ([`Lz4Stream::slide`]) therefore only has to copy the
//! bytes and bump the delta by the distance they moved.
//!
//! # API
//! - [`Lz4Stream::new`] / [`Lz4Stream::reset`]
//! - [`Lz4Stream::compress_continue`]
//! - [`Lz4Stream::slide`]
//!
//! # Thread safety
//! `Lz4Stream` is `Send` but not `Sync`; every method takes `&mut self`.

use super::compress::{compress_generic, Lz4Error, LZ4_ACCELERATION_DEFAULT};
use super::types::{
    HISTORY_SIZE, INDEX_BASE, INDEX_RENORM_THRESHOLD, LZ4_HASH_SIZE_U32,
};

/// LZ4 streaming compression context.
pub struct Lz4Stream {
    pub(crate) hash_table: Box<[u32]>,
    /// Index assigned to arena offset 0.
    pub(crate) index_delta: u32,
    /// First arena offset still usable as history.
    pub(crate) history_start: usize,
    /// End of the last compressed region; the next block is expected here.
    pub(crate) history_end: usize,
    acceleration: u32,
}

impl Default for Lz4Stream {
    fn default() -> Self {
        Self {
            hash_table: vec![0u32; LZ4_HASH_SIZE_U32].into_boxed_slice(),
            index_delta: INDEX_BASE,
            history_start: 0,
            history_end: 0,
            acceleration: LZ4_ACCELERATION_DEFAULT,
        }
    }
}

impl Lz4Stream {
    /// Allocate a fresh streaming context anchored at arena offset 0.
    pub fn new() -> Box<Self> {
        Box::default()
    }

    /// Fully reset the stream: no history, empty table, anchored at offset 0.
    ///
    /// The acceleration setting is kept.
    pub fn reset(&mut self) {
        self.hash_table.fill(0);
        self.index_delta = INDEX_BASE;
        self.history_start = 0;
        self.history_end = 0;
    }

    /// Trade ratio for speed; 1 (the default) checks every position.
    pub fn set_acceleration(&mut self, acceleration: u32) {
        self.acceleration = acceleration.max(1);
    }

    /// Compress `buf[start..end]` into `dst`, referencing history that
    /// precedes `start` in `buf`.
    ///
    /// History is only carried over when `start` continues where the
    /// previous call ended; otherwise this block starts a fresh history.
    /// Returns the compressed length.
    pub fn compress_continue(
        &mut self,
        buf: &[u8],
        start: usize,
        end: usize,
        dst: &mut [u8],
    ) -> Result<usize, Lz4Error> {
        if start != self.history_end {
            self.history_start = start;
        }
        let low = self.history_start.max(start.saturating_sub(HISTORY_SIZE));

        let result = compress_generic(
            &mut self.hash_table,
            self.index_delta,
            buf,
            low,
            start,
            end,
            self.acceleration,
            dst,
        );
        self.history_end = end;
        result
    }

    /// Move the last (up to) 64 KiB of history before `cursor` to the start
    /// of `buf` and rebase the stream onto the new layout.
    ///
    /// Returns the offset right after the relocated history, where the next
    /// block should be written.
    pub fn slide(&mut self, buf: &mut [u8], cursor: usize) -> usize {
        let kept = cursor.saturating_sub(self.history_start).min(HISTORY_SIZE);
        let from = cursor - kept;
        buf.copy_within(from..cursor, 0);

        self.index_delta += from as u32;
        self.history_start = 0;
        self.history_end = kept;
        if self.index_delta > INDEX_RENORM_THRESHOLD {
            self.renormalize();
        }
        kept
    }

    /// Pull `index_delta` back down to [`INDEX_BASE`] (plus its sub-64 KiB
    /// remainder), shifting every table slot by the same amount and clearing
    /// slots that fall below the new base.
    pub(crate) fn renormalize(&mut self) {
        let shift = renorm_shift(self.index_delta);
        for slot in self.hash_table.iter_mut() {
            *slot = slot.checked_sub(shift).unwrap_or(0);
        }
        self.index_delta -= shift;
    }
}

/// Shift that brings `index_delta` back near [`INDEX_BASE`] while keeping
/// `index & 0xFFFF` unchanged for every index.
pub(crate) fn renorm_shift(index_delta: u32) -> u32 {
    let target = INDEX_BASE + (index_delta & 0xFFFF);
    index_delta.saturating_sub(target)
}

//! Hash-chain match finder for the HC compressor.
//!
//! Two tables drive the search:
//!
//! - the **hash table** maps a 4-byte sequence hash to the most recent index
//!   holding that sequence;
//! - the **chain table** stores, for each index (modulo 64 Ki), the distance
//!   back to the previous index with the same hash.
//!
//! Indices are `index_delta + offset`, as in the fast compressor, so a slide
//! only moves the delta.  Chain slots are addressed by `index & 0xFFFF`,
//! which is why renormalisation always shifts by a multiple of 64 Ki.

use super::types::{LZ4HC_HASHTABLESIZE, LZ4HC_HASH_LOG, LZ4HC_MAXD, LZ4HC_MAXD_MASK};
use crate::block::types::{count, hash_sequence, read32, LZ4_DISTANCE_MAX, MINMATCH};

/// A back-reference candidate: source offset in the arena and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub pos: usize,
    pub len: usize,
}

/// Hash and chain tables plus the insertion frontier.
pub(crate) struct ChainTables {
    pub(crate) hash_table: Box<[u32]>,
    pub(crate) chain_table: Box<[u16]>,
    /// First index not yet inserted into the tables.
    pub(crate) next_to_update: u32,
}

#[inline(always)]
fn hash_at(buf: &[u8], pos: usize) -> usize {
    hash_sequence(read32(buf, pos), LZ4HC_HASH_LOG)
}

impl ChainTables {
    pub(crate) fn new(next_to_update: u32) -> Self {
        Self {
            hash_table: vec![0u32; LZ4HC_HASHTABLESIZE].into_boxed_slice(),
            chain_table: vec![u16::MAX; LZ4HC_MAXD].into_boxed_slice(),
            next_to_update,
        }
    }

    pub(crate) fn clear(&mut self, next_to_update: u32) {
        self.hash_table.fill(0);
        self.chain_table.fill(u16::MAX);
        self.next_to_update = next_to_update;
    }

    /// Insert every position from the frontier up to (excluding) `target`.
    ///
    /// `floor` is the arena offset below which nothing may be inserted; the
    /// frontier is pulled up to it when history was dropped.
    pub(crate) fn insert(&mut self, buf: &[u8], index_delta: u32, floor: usize, target: usize) {
        let target_idx = index_delta + target as u32;
        let mut idx = self.next_to_update.max(index_delta + floor as u32);

        while idx < target_idx {
            let h = hash_at(buf, (idx - index_delta) as usize);
            let delta = idx.wrapping_sub(self.hash_table[h]).min(LZ4_DISTANCE_MAX as u32);
            self.chain_table[idx as usize & LZ4HC_MAXD_MASK] = delta as u16;
            self.hash_table[h] = idx;
            idx += 1;
        }

        self.next_to_update = idx.max(self.next_to_update);
    }

    /// Insert up to `ip`, then walk the chain for the longest match at `ip`
    /// reaching no further back than `low` and no further forward than `limit`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn find_best_match(
        &mut self,
        buf: &[u8],
        index_delta: u32,
        ip: usize,
        low: usize,
        limit: usize,
        max_searches: u32,
    ) -> Option<Match> {
        self.insert(buf, index_delta, low, ip);

        let current = index_delta + ip as u32;
        let low_index = index_delta + low as u32;
        let sequence = read32(buf, ip);
        let mut candidate = self.hash_table[hash_at(buf, ip)];
        let mut attempts = max_searches;
        let mut best: Option<Match> = None;
        let mut best_len = MINMATCH - 1;

        while attempts > 0
            && candidate >= low_index
            && candidate < current
            && (current - candidate) as usize <= LZ4_DISTANCE_MAX
        {
            attempts -= 1;
            let pos = (candidate - index_delta) as usize;
            // Cheap rejection: a longer match must agree at the current best length.
            if buf[pos + best_len] == buf[ip + best_len] && read32(buf, pos) == sequence {
                let len = MINMATCH + count(buf, ip + MINMATCH, pos + MINMATCH, limit);
                if len > best_len {
                    best_len = len;
                    best = Some(Match { pos, len });
                    if ip + len >= limit {
                        break;
                    }
                }
            }

            let step = self.chain_table[candidate as usize & LZ4HC_MAXD_MASK] as u32;
            if step == 0 {
                break;
            }
            candidate = candidate.wrapping_sub(step);
        }

        best
    }

    /// Shift every stored index down by `shift` (a multiple of 64 Ki).
    pub(crate) fn renormalize(&mut self, shift: u32) {
        debug_assert_eq!(shift as usize & LZ4HC_MAXD_MASK, 0);
        for slot in self.hash_table.iter_mut() {
            *slot = slot.checked_sub(shift).unwrap_or(0);
        }
        self.next_to_update = self.next_to_update.saturating_sub(shift);
    }
}

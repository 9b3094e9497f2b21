//! LZ4 block compression with a greedy hash-table match finder.
//!
//! [`compress_generic`] is the single compression loop behind both the
//! one-shot helpers in this module and the continuation stream in
//! [`super::stream`].  It compresses `buf[start..end]` and may reference any
//! byte in `buf[low..start]` (the history) up to [`LZ4_DISTANCE_MAX`] back.
//!
//! Positions are recorded in the hash table as `index_delta + offset`, so a
//! stream can move its arena contents and keep its table valid by adjusting
//! the delta alone.
//!
//! Each compressed sequence consists of a literal run followed by a match
//! (offset + length); bytes that cannot be matched are emitted as a final
//! literal run.  See the [LZ4 block format specification].
//!
//! [LZ4 block format specification]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md
//! [`LZ4_DISTANCE_MAX`]: super::types::LZ4_DISTANCE_MAX

use std::fmt;

use super::encode::SequenceWriter;
use super::stream::Lz4Stream;
use super::types::{
    compress_bound, count, hash_sequence, read32, LASTLITERALS, LZ4_DISTANCE_MAX, LZ4_HASHLOG,
    LZ4_MIN_LENGTH, LZ4_SKIP_TRIGGER, MFLIMIT, MINMATCH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum allowed input size (2 113 929 216 bytes).  Inputs larger than this
/// cannot be represented in an LZ4 block.
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

/// Default acceleration factor (1: check every position).
pub const LZ4_ACCELERATION_DEFAULT: u32 = 1;

/// Maximum allowed acceleration factor.
pub const LZ4_ACCELERATION_MAX: u32 = 65_537;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block compression functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The output buffer is too small to hold the compressed data.
    OutputTooSmall,
    /// The input exceeds `LZ4_MAX_INPUT_SIZE`.
    InputTooLarge,
}

impl fmt::Display for Lz4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz4Error::OutputTooSmall => f.write_str("destination buffer is too small"),
            Lz4Error::InputTooLarge => write!(f, "input exceeds {} bytes", LZ4_MAX_INPUT_SIZE),
        }
    }
}

impl std::error::Error for Lz4Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Core compression loop
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `buf[start..end]` into `dst`, returning the compressed length.
///
/// `hash_table` maps 4-byte sequence hashes to indices (`index_delta +
/// offset`); it is updated with the positions visited.  Candidates below
/// `low` or farther than [`LZ4_DISTANCE_MAX`] are rejected.
#[allow(clippy::too_many_arguments)]
pub(crate) fn compress_generic(
    hash_table: &mut [u32],
    index_delta: u32,
    buf: &[u8],
    low: usize,
    start: usize,
    end: usize,
    acceleration: u32,
    dst: &mut [u8],
) -> Result<usize, Lz4Error> {
    debug_assert!(low <= start && start <= end && end <= buf.len());
    if end - start > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }

    let acceleration = acceleration.clamp(1, LZ4_ACCELERATION_MAX);
    let index_of = |pos: usize| index_delta.wrapping_add(pos as u32);
    let low_index = index_of(low);

    let mut out = SequenceWriter::new(dst);
    let mut anchor = start;

    if end - start >= LZ4_MIN_LENGTH {
        let mflimit = end - MFLIMIT;
        let match_limit = end - LASTLITERALS;

        let mut ip = start;
        hash_table[hash_sequence(read32(buf, ip), LZ4_HASHLOG)] = index_of(ip);
        ip += 1;
        let mut search_nb = acceleration << LZ4_SKIP_TRIGGER;

        while ip <= mflimit {
            let sequence = read32(buf, ip);
            let h = hash_sequence(sequence, LZ4_HASHLOG);
            let current = index_of(ip);
            let candidate = hash_table[h];
            hash_table[h] = current;

            let usable = candidate >= low_index
                && candidate < current
                && (current - candidate) as usize <= LZ4_DISTANCE_MAX;
            if !usable || read32(buf, (candidate - index_delta) as usize) != sequence {
                ip += (search_nb >> LZ4_SKIP_TRIGGER) as usize;
                search_nb += 1;
                continue;
            }

            let mut match_pos = (candidate - index_delta) as usize;
            // Catch up: extend the match backwards over pending literals.
            while ip > anchor && match_pos > low && buf[ip - 1] == buf[match_pos - 1] {
                ip -= 1;
                match_pos -= 1;
            }

            let match_length =
                MINMATCH + count(buf, ip + MINMATCH, match_pos + MINMATCH, match_limit);
            out.sequence(&buf[anchor..ip], ip - match_pos, match_length)?;

            ip += match_length;
            anchor = ip;
            search_nb = acceleration << LZ4_SKIP_TRIGGER;

            if ip <= mflimit {
                let fill = ip - 2;
                hash_table[hash_sequence(read32(buf, fill), LZ4_HASHLOG)] = index_of(fill);
            }
        }
    }

    out.last_literals(&buf[anchor..end])?;
    Ok(out.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` with the given acceleration (1 = best ratio).
///
/// Returns the number of bytes written, or [`Lz4Error::OutputTooSmall`] when
/// `dst` cannot hold the result.
pub fn compress_fast(src: &[u8], dst: &mut [u8], acceleration: u32) -> Result<usize, Lz4Error> {
    let mut stream = Lz4Stream::new();
    stream.set_acceleration(acceleration);
    stream.compress_continue(src, 0, src.len(), dst)
}

/// Compress `src` into `dst` at the default acceleration.
pub fn compress_default(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    compress_fast(src, dst, LZ4_ACCELERATION_DEFAULT)
}

/// Compress `src` into a freshly allocated, exactly-sized vector.
pub fn compress_to_vec(src: &[u8]) -> Result<Vec<u8>, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = compress_default(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}

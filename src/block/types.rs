//! LZ4 block constants, slice read helpers, match counting and hashing.
//!
//! Everything here works on `&[u8]` plus byte offsets.  The streaming
//! compressors keep positions as offsets into a caller-owned arena, so none
//! of these helpers ever hold on to an address across calls.

// ─────────────────────────────────────────────────────────────────────────────
// Format constants (see doc/lz4_Block_format.md#parsing-restrictions)
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Last N bytes of the input are always emitted as literals.
pub const LASTLITERALS: usize = 5;

/// A match may not start within the last `MFLIMIT` bytes of a block.
pub const MFLIMIT: usize = 12;

/// Minimum input length that may produce any match at all.
pub const LZ4_MIN_LENGTH: usize = MFLIMIT + 1;

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

/// Maximum back-reference distance representable in a sequence.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

/// Size of the history a continuation stream may reference.
pub const HISTORY_SIZE: usize = 64 * KB;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Fast-variant hash table sizing (LZ4_MEMORY_USAGE = 14 → 16 KiB table)
// ─────────────────────────────────────────────────────────────────────────────

pub const LZ4_MEMORY_USAGE: u32 = 14;
pub const LZ4_HASHLOG: u32 = LZ4_MEMORY_USAGE - 2;
pub const LZ4_HASH_SIZE_U32: usize = 1 << LZ4_HASHLOG;

/// Higher → faster on incompressible data at the cost of compression ratio.
pub const LZ4_SKIP_TRIGGER: u32 = 6;

/// Index the streaming compressors assign to arena offset 0 after a reset.
///
/// Starting above zero lets a zeroed table slot read as "no candidate":
/// every valid index is at least this value.
pub const INDEX_BASE: u32 = 64 * KB as u32;

/// Once the index delta grows past this, the tables are renormalised so
/// that indices stay comfortably inside `u32` for any arena size.
pub const INDEX_RENORM_THRESHOLD: u32 = 0x4000_0000;

// ─────────────────────────────────────────────────────────────────────────────
// Read helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` at `pos`.  Panics if fewer than 4 bytes remain,
/// which callers rule out through the `MFLIMIT` parsing restriction.
#[inline(always)]
pub fn read32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

#[inline(always)]
fn read64(buf: &[u8], pos: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[pos..pos + 8]);
    u64::from_le_bytes(word)
}

/// Count how many bytes starting at `ip` equal the bytes starting at
/// `candidate`, never reading at or beyond `limit` on the `ip` side.
///
/// `candidate < ip` always holds for back-references, so the candidate side
/// stays in bounds as well.
#[inline]
pub fn count(buf: &[u8], mut ip: usize, mut candidate: usize, limit: usize) -> usize {
    let start = ip;
    while ip + 8 <= limit {
        let diff = read64(buf, ip) ^ read64(buf, candidate);
        if diff != 0 {
            return ip - start + (diff.trailing_zeros() / 8) as usize;
        }
        ip += 8;
        candidate += 8;
    }
    while ip < limit && buf[ip] == buf[candidate] {
        ip += 1;
        candidate += 1;
    }
    ip - start
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplicative hash of a 4-byte sequence keeping `log` bits.
#[inline(always)]
pub fn hash_sequence(sequence: u32, log: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761u32) >> (32 - log)) as usize
}

/// Worst-case compressed size for a given input size.
///
/// Returns 0 if `input_size` exceeds [`super::compress::LZ4_MAX_INPUT_SIZE`].
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    if input_size > super::compress::LZ4_MAX_INPUT_SIZE {
        0
    } else {
        input_size + input_size / 255 + 16
    }
}

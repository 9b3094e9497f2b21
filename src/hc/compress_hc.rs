//! HC parsing loop: hash-chain search with optional one-step lazy matching.
//!
//! Like the fast compressor it compresses `buf[start..end]` with
//! `buf[low..start]` as reachable history, and it writes through the shared
//! [`SequenceWriter`], so both variants emit byte-identical block framing.

use super::search::{ChainTables, Match};
use super::types::CParams;
use crate::block::compress::{Lz4Error, LZ4_MAX_INPUT_SIZE};
use crate::block::encode::SequenceWriter;
use crate::block::types::{LASTLITERALS, LZ4_MIN_LENGTH, MFLIMIT};

/// Compress `buf[start..end]` into `dst` using the hash-chain match finder.
#[allow(clippy::too_many_arguments)]
pub(crate) fn compress_hash_chain(
    tables: &mut ChainTables,
    index_delta: u32,
    buf: &[u8],
    low: usize,
    start: usize,
    end: usize,
    params: CParams,
    dst: &mut [u8],
) -> Result<usize, Lz4Error> {
    debug_assert!(low <= start && start <= end && end <= buf.len());
    if end - start > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }

    let mut out = SequenceWriter::new(dst);
    let mut anchor = start;

    if end - start >= LZ4_MIN_LENGTH {
        let mflimit = end - MFLIMIT;
        let match_limit = end - LASTLITERALS;
        let search = |tables: &mut ChainTables, at: usize| {
            tables.find_best_match(buf, index_delta, at, low, match_limit, params.nb_searches)
        };

        let mut ip = start;
        while ip <= mflimit {
            let Some(mut best) = search(tables, ip) else {
                ip += 1;
                continue;
            };

            // Lazy evaluation: slide the match start while the next
            // position offers a strictly longer one.
            let mut at = ip;
            if params.lazy {
                while at < mflimit {
                    match search(tables, at + 1) {
                        Some(next) if next.len > best.len => {
                            at += 1;
                            best = next;
                        }
                        _ => break,
                    }
                }
            }

            let Match { mut pos, mut len } = best;
            while at > anchor && pos > low && buf[at - 1] == buf[pos - 1] {
                at -= 1;
                pos -= 1;
                len += 1;
            }

            out.sequence(&buf[anchor..at], at - pos, len)?;
            ip = at + len;
            anchor = ip;
        }
    }

    out.last_literals(&buf[anchor..end])?;
    Ok(out.len())
}

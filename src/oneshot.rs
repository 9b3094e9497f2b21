//! One-shot compression without session state.
//!
//! Two framings are offered:
//!
//! - **size-prefixed** ([`compress`], [`compress_hc`], [`uncompress`]): a
//!   varbyte header holding the original length, followed by one LZ4 block;
//! - **raw** ([`raw_compress`], [`raw_compress_hc`], [`raw_uncompress`]): the
//!   bare block, with the caller supplying the output bound.
//!
//! The varbyte header stores 7 bits per byte, least significant group
//! first, with the high bit set on every byte except the last.  Decoders
//! read at most [`VARBYTE_MAX_LEN`] bytes.

use crate::block::compress::LZ4_MAX_INPUT_SIZE;
use crate::block::types::compress_bound;
use crate::block::{compress_default, decompress_safe};
use crate::config::{DECODE_LIMIT_DEFAULT, HC_CLEVEL_DEFAULT};
use crate::hc::compress_hc_into;
use crate::stream::{Error, Result};

/// Longest varbyte header accepted by [`decode_varbyte`].
pub const VARBYTE_MAX_LEN: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Varbyte header
// ─────────────────────────────────────────────────────────────────────────────

/// Append the varbyte encoding of `value` to `out`.
pub fn encode_varbyte_into(mut value: usize, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

pub fn encode_varbyte(value: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(VARBYTE_MAX_LEN);
    encode_varbyte_into(value, &mut out);
    out
}

/// Decode a varbyte header, returning `(value, header_length)`.
///
/// Returns `None` when no terminating byte appears in the first
/// [`VARBYTE_MAX_LEN`] bytes.
pub fn decode_varbyte(input: &[u8]) -> Option<(usize, usize)> {
    let mut value = 0usize;
    for (i, &b) in input.iter().take(VARBYTE_MAX_LEN).enumerate() {
        value |= ((b & 0x7F) as usize) << (7 * i);
        if b & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Size-prefixed framing
// ─────────────────────────────────────────────────────────────────────────────

fn compress_prefixed(
    input: &[u8],
    compressor: impl FnOnce(&[u8], &mut [u8]) -> std::result::Result<usize, crate::block::Lz4Error>,
) -> Result<Vec<u8>> {
    if input.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Error::InvalidArgument);
    }
    let mut out = Vec::with_capacity(VARBYTE_MAX_LEN + compress_bound(input.len()));
    encode_varbyte_into(input.len(), &mut out);
    let header_len = out.len();
    out.resize(header_len + compress_bound(input.len()), 0);

    let n = compressor(input, &mut out[header_len..])?;
    out.truncate(header_len + n);
    Ok(out)
}

/// Compress `input` with the fast compressor behind a length header.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_prefixed(input, compress_default)
}

/// Compress `input` with the HC compressor behind a length header.
pub fn compress_hc(input: &[u8]) -> Result<Vec<u8>> {
    compress_prefixed(input, |src, dst| compress_hc_into(src, dst, HC_CLEVEL_DEFAULT))
}

/// Decode the output of [`compress`] or [`compress_hc`].
///
/// The block must decode to exactly the length named in the header.
pub fn uncompress(input: &[u8]) -> Result<Vec<u8>> {
    let (expected, header_len) = decode_varbyte(input).ok_or(Error::CorruptData)?;
    let body = &input[header_len..];
    // A block cannot expand by more than 255x; reject absurd headers before allocating.
    if expected > LZ4_MAX_INPUT_SIZE || expected > body.len().saturating_mul(255) {
        return Err(Error::CorruptData);
    }

    let mut out = vec![0u8; expected];
    let n = decompress_safe(body, &mut out)?;
    if n != expected {
        return Err(Error::CorruptData);
    }
    Ok(out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw blocks
// ─────────────────────────────────────────────────────────────────────────────

fn raw_compress_with(
    src: &[u8],
    max_output: Option<usize>,
    compressor: impl FnOnce(&[u8], &mut [u8]) -> std::result::Result<usize, crate::block::Lz4Error>,
) -> Result<Vec<u8>> {
    if src.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Error::InvalidArgument);
    }
    let mut dst = vec![0u8; max_output.unwrap_or_else(|| compress_bound(src.len()))];
    let n = compressor(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}

/// Compress `src` into a bare block of at most `max_output` bytes
/// (default: the worst-case bound).
pub fn raw_compress(src: &[u8], max_output: Option<usize>) -> Result<Vec<u8>> {
    raw_compress_with(src, max_output, compress_default)
}

pub fn raw_compress_hc(src: &[u8], max_output: Option<usize>) -> Result<Vec<u8>> {
    raw_compress_with(src, max_output, |s, d| compress_hc_into(s, d, HC_CLEVEL_DEFAULT))
}

/// Decode a bare block producing at most `max_output` bytes
/// (default [`DECODE_LIMIT_DEFAULT`]).
pub fn raw_uncompress(src: &[u8], max_output: Option<usize>) -> Result<Vec<u8>> {
    let mut out = vec![0u8; max_output.unwrap_or(DECODE_LIMIT_DEFAULT)];
    let n = decompress_safe(src, &mut out)?;
    out.truncate(n);
    Ok(out)
}

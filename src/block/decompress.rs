//! LZ4 block decompression.
//!
//! # Security boundary
//!
//! This module is the decompression path for untrusted input.  Every length
//! and offset read from the compressed stream is checked against the input
//! and output bounds before use.  Malformed or truncated input returns
//! `Err(DecompressError::MalformedInput)`; it never panics.
//!
//! The output capacity is part of the contract: a block that would decode to
//! more bytes than the caller allowed is rejected with the same error, since
//! from the stream alone the two cases cannot be told apart.

use std::fmt;

use super::types::{MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed data is malformed, truncated, or decodes to more bytes
    /// than the output capacity allows.
    MalformedInput,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed input or output capacity too small")
    }
}

impl std::error::Error for DecompressError {}

#[inline(always)]
fn output_error<T>() -> Result<T, DecompressError> {
    Err(DecompressError::MalformedInput)
}

// ─────────────────────────────────────────────────────────────────────────────
// Variable-length integers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a run of 255-continued length bytes starting at `*ip`.
///
/// Returns the accumulated value; fails if the input ends before a byte
/// below 255 terminates the run.
#[inline]
fn read_variable_length(src: &[u8], ip: &mut usize) -> Result<usize, DecompressError> {
    let mut length = 0usize;
    loop {
        let Some(&s) = src.get(*ip) else {
            return output_error();
        };
        *ip += 1;
        length = match length.checked_add(s as usize) {
            Some(l) => l,
            None => return output_error(),
        };
        if s != 255 {
            return Ok(length);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core loop
// ─────────────────────────────────────────────────────────────────────────────

/// Decode `src` into `buf[prefix_len..]`, treating `buf[..prefix_len]` as
/// already-decoded history that back-references may reach into.
///
/// The whole of `buf` past the prefix is available for output; the number of
/// bytes produced is returned.
pub fn decompress_with_prefix(
    src: &[u8],
    buf: &mut [u8],
    prefix_len: usize,
) -> Result<usize, DecompressError> {
    if prefix_len > buf.len() {
        return output_error();
    }
    let oend = buf.len();
    let mut ip = 0usize;
    let mut op = prefix_len;

    loop {
        let Some(&token) = src.get(ip) else {
            return output_error();
        };
        ip += 1;

        // ── literals ──────────────────────────────────────────────────────
        let mut run = (token >> ML_BITS) as usize;
        if run == RUN_MASK as usize {
            run += read_variable_length(src, &mut ip)?;
        }
        if run > src.len() - ip || run > oend - op {
            return output_error();
        }
        buf[op..op + run].copy_from_slice(&src[ip..ip + run]);
        ip += run;
        op += run;

        // The last sequence carries literals only.
        if ip == src.len() {
            break;
        }

        // ── match ─────────────────────────────────────────────────────────
        if src.len() - ip < 2 {
            return output_error();
        }
        let offset = u16::from_le_bytes([src[ip], src[ip + 1]]) as usize;
        ip += 2;
        if offset == 0 || offset > op {
            return output_error();
        }

        let mut match_length = (token as u32 & ML_MASK) as usize;
        if match_length == ML_MASK as usize {
            match_length += read_variable_length(src, &mut ip)?;
        }
        match_length += MINMATCH;
        if match_length > oend - op {
            return output_error();
        }

        let from = op - offset;
        if offset >= match_length {
            buf.copy_within(from..from + match_length, op);
        } else {
            // Overlapping copy: the match repeats the last `offset` bytes.
            for i in 0..match_length {
                buf[op + i] = buf[from + i];
            }
        }
        op += match_length;
    }

    Ok(op - prefix_len)
}

/// Decompress `src` into `dst`, returning the number of bytes written.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    decompress_with_prefix(src, dst, 0)
}

/// Decompress `src` with `dict` as the history preceding the block.
///
/// Only the last 64 KiB of `dict` can be referenced.
pub fn decompress_safe_using_dict(
    src: &[u8],
    dst: &mut [u8],
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let dict = &dict[dict.len().saturating_sub(super::types::HISTORY_SIZE)..];
    let mut scratch = Vec::with_capacity(dict.len() + dst.len());
    scratch.extend_from_slice(dict);
    scratch.resize(dict.len() + dst.len(), 0);
    let n = decompress_with_prefix(src, &mut scratch, dict.len())?;
    dst[..n].copy_from_slice(&scratch[dict.len()..dict.len() + n]);
    Ok(n)
}

/// Decompress `src`, allowing at most `max_output` bytes of output.
pub fn decompress_to_vec(src: &[u8], max_output: usize) -> Result<Vec<u8>, DecompressError> {
    let mut dst = vec![0u8; max_output];
    let n = decompress_safe(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}

//! `Write` adapter producing an lz4s container.

use std::io::{self, Write};

use crate::displaylevel;
use crate::stream::{StreamEncoder, Variant};
use crate::xxhash::{checksum_state, Xxh32State};

use super::header::ContainerHeader;

pub(crate) fn session_error(err: crate::stream::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

/// Buffers plaintext into blocks and writes each one through a
/// [`StreamEncoder`].
///
/// The header is written on construction.  [`StreamWriter::finish`] must be
/// called to emit the end mark and checksum; dropping the writer leaves an
/// unterminated container.
pub struct StreamWriter<W: Write> {
    inner: W,
    encoder: StreamEncoder,
    block_size: usize,
    pending: Vec<u8>,
    packed: Vec<u8>,
    checksum: Xxh32State,
    blocks: u64,
    bytes_in: u64,
    bytes_out: u64,
}

impl<W: Write> StreamWriter<W> {
    /// Start a container on `inner` with blocks of `block_size` bytes.
    pub fn new(
        mut inner: W,
        block_size: usize,
        variant: Variant,
        dictionary: Option<&[u8]>,
    ) -> io::Result<Self> {
        let encoder = StreamEncoder::new(block_size, variant, dictionary).map_err(session_error)?;
        let header = ContainerHeader {
            variant,
            has_dictionary: dictionary.is_some(),
            block_size,
        };
        header.write_to(&mut inner)?;

        Ok(Self {
            inner,
            encoder,
            block_size,
            pending: Vec::with_capacity(block_size),
            packed: Vec::new(),
            checksum: checksum_state(),
            blocks: 0,
            bytes_in: 0,
            bytes_out: super::header::HEADER_SIZE as u64,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Plaintext bytes accepted so far.
    pub fn total_in(&self) -> u64 {
        self.bytes_in
    }

    /// Container bytes written so far.
    pub fn total_out(&self) -> u64 {
        self.bytes_out
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    fn emit_pending(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let n = self
            .encoder
            .update_into(&self.pending, &mut self.packed, None)
            .map_err(session_error)?;
        self.inner.write_all(&(n as u32).to_le_bytes())?;
        self.inner.write_all(&self.packed)?;

        self.checksum.update(&self.pending);
        self.blocks += 1;
        self.bytes_in += self.pending.len() as u64;
        self.bytes_out += 4 + n as u64;
        displaylevel!(
            4,
            "block {}: {} -> {} bytes\n",
            self.blocks,
            self.pending.len(),
            n
        );
        self.pending.clear();
        Ok(())
    }

    /// Emit the last partial block, the end mark and the checksum, and
    /// return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.emit_pending()?;
        self.inner.write_all(&0u32.to_le_bytes())?;
        self.inner.write_all(&self.checksum.digest().to_le_bytes())?;
        self.inner.flush()?;
        self.bytes_out += 8;
        displaylevel!(
            3,
            "compressed {} bytes into {} bytes ({} blocks)\n",
            self.bytes_in,
            self.bytes_out,
            self.blocks
        );
        Ok(self.inner)
    }
}

impl<W: Write> Write for StreamWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while !rest.is_empty() {
            let room = self.block_size - self.pending.len();
            let take = room.min(rest.len());
            self.pending.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
            if self.pending.len() == self.block_size {
                self.emit_pending()?;
            }
        }
        Ok(buf.len())
    }

    /// Emits any buffered plaintext as a (possibly short) block.
    fn flush(&mut self) -> io::Result<()> {
        self.emit_pending()?;
        self.inner.flush()
    }
}

//! `Read` adapter decoding an lz4s container.

use std::io::{self, Read};

use crate::block::types::compress_bound;
use crate::displaylevel;
use crate::stream::StreamDecoder;
use crate::xxhash::{checksum_state, Xxh32State};

use super::header::{read_u32_le, ContainerHeader};

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Decodes the blocks of a container and yields the plaintext.
///
/// The checksum is verified when the end mark is reached; a mismatch is
/// reported as [`io::ErrorKind::InvalidData`] by the `read` call that hits it.
pub struct StreamReader<R: Read> {
    inner: R,
    header: ContainerHeader,
    decoder: StreamDecoder,
    block: Vec<u8>,
    out: Vec<u8>,
    pos: usize,
    checksum: Xxh32State,
    finished: bool,
}

impl<R: Read> StreamReader<R> {
    /// Parse the header from `inner`.
    ///
    /// `dictionary` must be supplied exactly when the container was written
    /// with one.
    pub fn new(mut inner: R, dictionary: Option<&[u8]>) -> io::Result<Self> {
        let header = ContainerHeader::read_from(&mut inner)?;
        let dictionary = match (header.has_dictionary, dictionary) {
            (true, None) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "stream was written with a preset dictionary",
                ))
            }
            (true, dict) => dict,
            (false, _) => None,
        };
        let decoder = StreamDecoder::new(dictionary);
        displaylevel!(
            4,
            "lz4s stream: block size {}, {:?}\n",
            header.block_size,
            header.variant
        );

        Ok(Self {
            inner,
            header,
            decoder,
            block: Vec::new(),
            out: Vec::new(),
            pos: 0,
            checksum: checksum_state(),
            finished: false,
        })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Decode the next block into `out`. Returns `false` at end of stream.
    fn next_block(&mut self) -> io::Result<bool> {
        let len = read_u32_le(&mut self.inner)? as usize;
        if len == 0 {
            let expected = read_u32_le(&mut self.inner)?;
            let actual = self.checksum.digest();
            if expected != actual {
                return Err(invalid_data(format!(
                    "content checksum mismatch: stored {expected:08x}, computed {actual:08x}"
                )));
            }
            self.finished = true;
            return Ok(false);
        }
        if len > compress_bound(self.header.block_size) {
            return Err(invalid_data(format!("block length {len} exceeds bound")));
        }

        // Grow only as bytes arrive; the length prefix is untrusted.
        self.block.clear();
        let got = (&mut self.inner).take(len as u64).read_to_end(&mut self.block)?;
        if got != len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("block truncated: {got} of {len} bytes"),
            ));
        }
        // A sequence never expands more than 255-fold.
        let max_output = self.header.block_size.min(len.saturating_mul(255));
        self.decoder
            .update_into(&self.block, max_output, &mut self.out)
            .map_err(|e| invalid_data(e.to_string()))?;
        self.checksum.update(&self.out);
        self.pos = 0;
        Ok(true)
    }
}

impl<R: Read> Read for StreamReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pos == self.out.len() {
            if self.finished || !self.next_block()? {
                return Ok(0);
            }
        }
        let n = buf.len().min(self.out.len() - self.pos);
        buf[..n].copy_from_slice(&self.out[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

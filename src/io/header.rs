//! Container header.
//!
//! ```text
//! offset  size  field
//!      0     4  magic "LZ4S"
//!      4     1  version (1)
//!      5     1  flags: bit 0 high-ratio, bit 1 preset dictionary
//!      6     4  block size, u32 little-endian
//! ```
//!
//! The header is followed by blocks (`u32` compressed length, payload), a
//! zero length as end mark, and the XXH32 of the whole plaintext.

use std::io::{self, Read, Write};

use crate::block::compress::LZ4_MAX_INPUT_SIZE;
use crate::stream::Variant;

pub const LZ4S_MAGIC: [u8; 4] = *b"LZ4S";
pub const LZ4S_VERSION: u8 = 1;
pub const HEADER_SIZE: usize = 10;

pub const FLAG_HIGH_RATIO: u8 = 0x01;
pub const FLAG_DICTIONARY: u8 = 0x02;
const FLAGS_KNOWN: u8 = FLAG_HIGH_RATIO | FLAG_DICTIONARY;

/// Parsed container header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerHeader {
    pub variant: Variant,
    pub has_dictionary: bool,
    pub block_size: usize,
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_owned())
}

impl ContainerHeader {
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut flags = 0u8;
        if self.variant == Variant::HighRatio {
            flags |= FLAG_HIGH_RATIO;
        }
        if self.has_dictionary {
            flags |= FLAG_DICTIONARY;
        }
        let mut out = [0u8; HEADER_SIZE];
        out[..4].copy_from_slice(&LZ4S_MAGIC);
        out[4] = LZ4S_VERSION;
        out[5] = flags;
        out[6..].copy_from_slice(&(self.block_size as u32).to_le_bytes());
        out
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_bytes())
    }

    pub fn parse(bytes: &[u8; HEADER_SIZE]) -> io::Result<Self> {
        if bytes[..4] != LZ4S_MAGIC {
            return Err(invalid_data("not an lz4s stream (bad magic)"));
        }
        if bytes[4] != LZ4S_VERSION {
            return Err(invalid_data("unsupported lz4s version"));
        }
        let flags = bytes[5];
        if flags & !FLAGS_KNOWN != 0 {
            return Err(invalid_data("reserved header flag set"));
        }
        let block_size = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) as usize;
        if block_size == 0 || block_size > LZ4_MAX_INPUT_SIZE {
            return Err(invalid_data("invalid block size"));
        }
        Ok(Self {
            variant: if flags & FLAG_HIGH_RATIO != 0 {
                Variant::HighRatio
            } else {
                Variant::Fast
            },
            has_dictionary: flags & FLAG_DICTIONARY != 0,
            block_size,
        })
    }

    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; HEADER_SIZE];
        r.read_exact(&mut bytes)?;
        Self::parse(&bytes)
    }
}

pub(crate) fn read_u32_le<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut word = [0u8; 4];
    r.read_exact(&mut word)?;
    Ok(u32::from_le_bytes(word))
}

// prefs.rs: file-level preferences for the container pipeline.
//
// `Prefs` is a plain value type; the CLI builds one from its flags and hands
// it to `compress_filename` / `decompress_filename`.

use std::fs;
use std::io;

use crate::config::BLOCK_SIZE_DEFAULT;
use crate::displaylevel;
use crate::stream::Variant;

/// Options shared by compression and decompression of a single file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Overwrite existing destination files. Default: false.
    pub overwrite: bool,
    /// Plaintext bytes per block when compressing. Default: 256 KiB.
    pub block_size: usize,
    /// Codec used when compressing. Ignored on decompression (the header
    /// records it).
    pub variant: Variant,
    /// Preset dictionary contents, if any.
    pub dictionary: Option<Vec<u8>>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            overwrite: false,
            block_size: BLOCK_SIZE_DEFAULT,
            variant: Variant::Fast,
            dictionary: None,
        }
    }
}

impl Prefs {
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    pub fn set_block_size(&mut self, block_size: usize) -> usize {
        self.block_size = block_size;
        block_size
    }

    pub fn set_variant(&mut self, variant: Variant) -> Variant {
        self.variant = variant;
        variant
    }

    /// Load the preset dictionary from `path`.
    ///
    /// Only the last `HISTORY_WINDOW` bytes are ever used by a session, but
    /// the whole file is kept so the same `Prefs` can be reused.
    pub fn load_dictionary(&mut self, path: &str) -> io::Result<usize> {
        let bytes = fs::read(path).map_err(|e| {
            io::Error::new(e.kind(), format!("dictionary {}: {}", path, e))
        })?;
        displaylevel!(4, "loaded {} byte dictionary from {}\n", bytes.len(), path);
        let len = bytes.len();
        self.dictionary = Some(bytes);
        Ok(len)
    }

    pub fn dictionary(&self) -> Option<&[u8]> {
        self.dictionary.as_deref()
    }
}

//! Command-line flags of the `lz4s` binary.

use clap::{ArgAction, Parser};

use crate::cli::arg_utils::parse_size;
use crate::io::STDIN_MARK;

/// Streaming LZ4 compression with a sliding 64 KiB history.
#[derive(Debug, Parser)]
#[command(name = "lz4s", version, about)]
pub struct Args {
    /// Decompress (implied when INPUT ends in .lz4s)
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Use the high-ratio codec
    #[arg(short = '9', long = "high")]
    pub high: bool,

    /// Block size in bytes (K and M suffixes accepted) [env: LZ4S_BLOCKSIZE]
    #[arg(short = 'B', long = "block-size", value_parser = parse_size)]
    pub block_size: Option<usize>,

    /// Preset dictionary file
    #[arg(short = 'D', long = "dict", value_name = "DICT")]
    pub dictionary: Option<String>,

    /// Overwrite an existing output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Input file, `-` or absent for standard input
    pub input: Option<String>,

    /// Output file, `-` for standard output
    pub output: Option<String>,
}

impl Args {
    /// Input path with `-` and absence mapped to the stdin sentinel.
    pub fn input_path(&self) -> String {
        match self.input.as_deref() {
            None | Some("-") => STDIN_MARK.to_owned(),
            Some(path) => path.to_owned(),
        }
    }

    /// Display level after applying `-v` / `-q` to `base`.
    pub fn display_level(&self, base: u32) -> u32 {
        (base + u32::from(self.verbose)).saturating_sub(u32::from(self.quiet))
    }
}

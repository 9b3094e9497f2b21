//! Operation mode selection and environment-driven defaults.

use crate::cli::arg_utils::read_u32_from_str;
use crate::config::{BLOCK_SIZE_DEFAULT, ENV_BLOCKSIZE, LZ4S_EXTENSION};
use crate::display::display_level;
use crate::io::{STDIN_MARK, STDOUT_MARK};

/// What the binary does with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
}

/// Decompress when explicitly asked to or when `input` carries the
/// container extension, otherwise compress.
pub fn determine_op_mode(input: &str, force_decompress: bool) -> OpMode {
    if force_decompress || input.ends_with(LZ4S_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Output path used when none is given on the command line.
///
/// Standard input always goes to standard output.  A file input gains the
/// extension when compressing and loses it when decompressing; a
/// decompression input without the extension has no derivable name and
/// also goes to standard output.
pub fn derive_output_name(input: &str, mode: OpMode) -> String {
    if input == STDIN_MARK {
        return STDOUT_MARK.to_owned();
    }
    match mode {
        OpMode::Compress => format!("{}{}", input, LZ4S_EXTENSION),
        OpMode::Decompress => match input.strip_suffix(LZ4S_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem.to_owned(),
            _ => STDOUT_MARK.to_owned(),
        },
    }
}

/// Read the default block size from the `LZ4S_BLOCKSIZE` environment variable.
pub fn init_block_size() -> usize {
    init_block_size_from(std::env::var(ENV_BLOCKSIZE).ok().as_deref())
}

/// Testable core of [`init_block_size`]: parse an optional `LZ4S_BLOCKSIZE`
/// value.  `None` simulates the variable being unset.
pub fn init_block_size_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        match read_u32_from_str(env) {
            Some((val, "")) if val > 0 => return val as usize,
            _ => {
                if display_level() >= 2 {
                    eprintln!(
                        "Ignore environment variable setting {}={}: not a valid block size ",
                        ENV_BLOCKSIZE, env
                    );
                }
            }
        }
    }
    BLOCK_SIZE_DEFAULT
}

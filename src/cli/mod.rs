//! Command-line interface for the `lz4s` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`args`]      | `clap` flag definitions. |
//! | [`arg_utils`] | Size parsing with `K`/`M` suffixes. |
//! | [`op_mode`]   | Compress/decompress selection, output naming, environment defaults. |
//!
//! Typical call sequence: `Args::parse` → [`run`].

pub mod arg_utils;
pub mod args;
pub mod op_mode;

use std::io::IsTerminal;

use anyhow::{bail, Context};

use crate::display::{display_level, set_display_level};
use crate::displaylevel;
use crate::io::{compress_filename, decompress_filename, Prefs, STDIN_MARK, STDOUT_MARK};
use crate::stream::Variant;

use args::Args;
use op_mode::{derive_output_name, determine_op_mode, init_block_size, OpMode};

/// Execute the operation selected by `args`.
pub fn run(args: Args) -> anyhow::Result<()> {
    set_display_level(args.display_level(display_level()));

    let input = args.input_path();
    let op_mode = determine_op_mode(&input, args.decompress);
    let output = match args.output.as_deref() {
        Some("-") => STDOUT_MARK.to_owned(),
        Some(path) => path.to_owned(),
        None => derive_output_name(&input, op_mode),
    };

    if input == STDIN_MARK && std::io::stdin().is_terminal() {
        bail!("refusing to read from a console");
    }
    if output == STDOUT_MARK && op_mode == OpMode::Compress && std::io::stdout().is_terminal() {
        bail!("refusing to write compressed data to a console");
    }
    // Keep stdout clean of progress lines at the default level.
    if output == STDOUT_MARK && display_level() == 2 {
        set_display_level(1);
    }

    let mut prefs = Prefs::default();
    prefs.set_overwrite(args.force);
    prefs.set_block_size(args.block_size.unwrap_or_else(init_block_size));
    prefs.set_variant(if args.high {
        Variant::HighRatio
    } else {
        Variant::Fast
    });
    if let Some(dict) = args.dictionary.as_deref() {
        prefs
            .load_dictionary(dict)
            .with_context(|| format!("cannot load dictionary {}", dict))?;
    }

    displaylevel!(
        4,
        "{:?} {} -> {} (block size {}, {:?})\n",
        op_mode,
        input,
        output,
        prefs.block_size,
        prefs.variant
    );

    match op_mode {
        OpMode::Compress => compress_filename(&input, &output, &prefs)
            .with_context(|| format!("{}: compression failed", input))?,
        OpMode::Decompress => decompress_filename(&input, &output, &prefs)
            .with_context(|| format!("{}: decompression failed", input))?,
    };
    Ok(())
}

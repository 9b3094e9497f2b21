//! Binary entry point for the `lz4s` command-line tool.

use clap::Parser;

use lz4stream::cli::args::Args;

fn main() {
    let args = Args::parse();
    if let Err(err) = lz4stream::cli::run(args) {
        lz4stream::display!("lz4s: {:#}\n", err);
        std::process::exit(1);
    }
}

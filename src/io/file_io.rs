//! Source and destination resolution for the file pipeline.
//!
//! Paths are plain strings; [`STDIN_MARK`] and [`STDOUT_MARK`] select the
//! standard streams.  Both ends are buffered here so the container adapters
//! can issue small reads and writes.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::displaylevel;

/// Read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Opens `path` for reading.
///
/// Directories are refused with [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin().lock()));
    }

    if Path::new(path).is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

/// Buffered output of a transcode run.
///
/// `is_stdout` tells the caller whether a failed run left a file behind.
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Opens `path` for writing.
///
/// An existing regular file is only replaced when `overwrite` is set;
/// otherwise the call fails with [`io::ErrorKind::AlreadyExists`].  There is
/// no interactive prompt.
pub fn open_dst_file(path: &str, overwrite: bool) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile {
            inner: Box::new(BufWriter::new(io::stdout().lock())),
            is_stdout: true,
        });
    }

    if !overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten (use -f)", path),
        ));
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(DstFile {
        inner: Box::new(BufWriter::new(f)),
        is_stdout: false,
    })
}

//! Whole-file compression and decompression through the container format.

use std::io::{self, Read, Write};
use std::time::Instant;

use crate::displaylevel;

use super::file_io::{open_dst_file, open_src_file};
use super::prefs::Prefs;
use super::reader::StreamReader;
use super::writer::StreamWriter;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Byte counts of one transcode run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

fn copy_counted<R: Read + ?Sized, W: Write + ?Sized>(src: &mut R, dst: &mut W) -> io::Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dst.write_all(&buf[..n])?;
        total += n as u64;
    }
}

fn final_display(verb: &str, src: &str, stats: &TranscodeStats, start: Instant) {
    let ratio = if stats.bytes_in == 0 {
        0.0
    } else {
        stats.bytes_out as f64 / stats.bytes_in as f64 * 100.0
    };
    displaylevel!(
        2,
        "{:<20.20}: {} {} => {} bytes, {:.2}% ({:.3} s)\n",
        src,
        verb,
        stats.bytes_in,
        stats.bytes_out,
        ratio,
        start.elapsed().as_secs_f64()
    );
}

/// Compress `src` into a container at `dst`.
///
/// `src` may be [`super::STDIN_MARK`]; `dst` may be [`super::STDOUT_MARK`].
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<TranscodeStats> {
    let start = Instant::now();
    let mut input = open_src_file(src)?;
    let output = open_dst_file(dst, prefs.overwrite)?;

    let counted = CountingWriter { inner: output, count: 0 };
    let mut writer = StreamWriter::new(counted, prefs.block_size, prefs.variant, prefs.dictionary())?;
    let bytes_in = copy_counted(&mut input, &mut writer)?;
    let counted = writer.finish()?;

    let stats = TranscodeStats {
        bytes_in,
        bytes_out: counted.count,
    };
    final_display("compressed", src, &stats, start);
    Ok(stats)
}

/// Decompress the container at `src` into `dst`.
///
/// A destination file left behind by a failed decode is removed.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<TranscodeStats> {
    let start = Instant::now();
    let input = open_src_file(src)?;
    let mut counted = CountingReader { inner: input, count: 0 };
    let mut output = open_dst_file(dst, prefs.overwrite)?;

    let result = StreamReader::new(&mut counted, prefs.dictionary())
        .and_then(|mut reader| copy_counted(&mut reader, &mut output))
        .and_then(|written| output.flush().map(|()| written));
    let written = match result {
        Ok(n) => n,
        Err(e) => {
            if !output.is_stdout {
                drop(output);
                let _ = std::fs::remove_file(dst);
            }
            return Err(e);
        }
    };

    let stats = TranscodeStats {
        bytes_in: counted.count,
        bytes_out: written,
    };
    final_display("decompressed", src, &stats, start);
    Ok(stats)
}

struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

struct CountingReader<R> {
    inner: R,
    count: u64,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

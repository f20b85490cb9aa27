//! Streaming output with line-budget rotation and optional gzip.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Counters handed back when a sink is closed.
#[derive(Debug, Clone)]
pub struct SinkSummary {
    pub parts_written: u64,
    pub lines_written: u64,
    pub last_path: Option<PathBuf>,
}

/// Writes one variant per line to `<base>_mutations_part<N>.txt[.gz]`,
/// rotating to the next part once the line budget is reached.
///
/// Part files open lazily on first write: writing exactly the budget
/// yields one full part, and the next file appears only when more lines
/// follow. Owned and mutated by the coordinating thread only; workers
/// hand data back and never touch the sink.
pub struct StreamingSink {
    dir: PathBuf,
    base_id: String,
    compress: bool,
    max_lines: u64,
    part_number: u32,
    lines_in_part: u64,
    lines_total: u64,
    parts_written: u64,
    writer: Option<PartWriter>,
    last_path: Option<PathBuf>,
}

impl StreamingSink {
    pub fn new(dir: &Path, base_id: &str, compress: bool, max_lines: u64) -> Self {
        Self {
            dir: dir.to_path_buf(),
            base_id: base_id.to_string(),
            compress,
            max_lines,
            part_number: 1,
            lines_in_part: 0,
            lines_total: 0,
            parts_written: 0,
            writer: None,
            last_path: None,
        }
    }

    /// Append one variant as a UTF-8 line, rotating afterwards if the
    /// part's budget is now exhausted.
    pub fn write(&mut self, variant: &str) -> io::Result<()> {
        if self.writer.is_none() {
            self.writer = Some(self.open_part()?);
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(variant.as_bytes())?;
            writer.write_all(b"\n")?;
            self.lines_in_part += 1;
            self.lines_total += 1;
        }
        if self.max_lines > 0 && self.lines_in_part >= self.max_lines {
            self.rotate()?;
        }
        Ok(())
    }

    /// Finalize the current part (full or not) and report totals.
    pub fn close(mut self) -> io::Result<SinkSummary> {
        if let Some(writer) = self.writer.take() {
            writer.finish()?;
        }
        Ok(SinkSummary {
            parts_written: self.parts_written,
            lines_written: self.lines_total,
            last_path: self.last_path,
        })
    }

    /// Name of the part the next write would land in.
    pub fn part_path(&self) -> PathBuf {
        let suffix = if self.compress { ".txt.gz" } else { ".txt" };
        self.dir
            .join(format!("{}_mutations_part{}{}", self.base_id, self.part_number, suffix))
    }

    fn open_part(&mut self) -> io::Result<PartWriter> {
        let path = self.part_path();
        let file = BufWriter::new(File::create(&path)?);
        let writer = if self.compress {
            PartWriter::Gzip(GzEncoder::new(file, Compression::default()))
        } else {
            PartWriter::Plain(file)
        };
        self.last_path = Some(path);
        self.parts_written += 1;
        Ok(writer)
    }

    fn rotate(&mut self) -> io::Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.finish()?;
        }
        self.part_number += 1;
        self.lines_in_part = 0;
        Ok(())
    }
}

enum PartWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl PartWriter {
    /// Flush buffered data and, for gzip, write the stream trailer.
    fn finish(self) -> io::Result<()> {
        match self {
            PartWriter::Plain(mut writer) => writer.flush(),
            PartWriter::Gzip(encoder) => {
                let mut inner = encoder.finish()?;
                inner.flush()
            }
        }
    }
}

impl Write for PartWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            PartWriter::Plain(writer) => writer.write(buf),
            PartWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            PartWriter::Plain(writer) => writer.flush(),
            PartWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

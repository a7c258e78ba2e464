//! JSON-lines reading and writing of [`Instance`] records.

use std::{
    fs,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
};

use tracing::debug;

use crate::error::{DraftError, Result};

use super::models::Instance;

/// Streams instances from a JSON-lines source, one per non-blank line.
pub struct InstanceReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> InstanceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for InstanceReader<R> {
    type Item = Result<Instance>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let text = match text {
                Ok(text) => text,
                Err(e) => return Some(Err(DraftError::from(e).at_line(self.line))),
            };
            if text.trim().is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str(&text).map_err(|e| DraftError::from(e).at_line(self.line)),
            );
        }
    }
}

/// Open a JSON-lines file for streaming.
pub fn open_instances(path: &Path) -> Result<InstanceReader<BufReader<fs::File>>> {
    let file = fs::File::open(path)?;
    Ok(InstanceReader::new(BufReader::new(file)))
}

/// Read every instance of a JSON-lines file.
pub fn read_instances(path: &Path) -> Result<Vec<Instance>> {
    debug!("reading {}", path.display());
    open_instances(path)?.collect()
}

/// Writes instances as JSON lines, one object per line.
pub struct InstanceWriter<W: Write> {
    out: W,
    written: usize,
}

impl InstanceWriter<BufWriter<fs::File>> {
    /// Create (or truncate) `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self::new(BufWriter::new(fs::File::create(path)?)))
    }
}

impl<W: Write> InstanceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write(&mut self, instance: &Instance) -> Result<()> {
        serde_json::to_writer(&mut self.out, instance)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write all instances to `path`.
pub fn write_instances(path: &Path, instances: &[Instance]) -> Result<()> {
    let mut writer = InstanceWriter::create(path)?;
    for instance in instances {
        writer.write(instance)?;
    }
    writer.finish()?;
    Ok(())
}

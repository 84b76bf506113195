// ABOUTME: Append-only text file of exported values, one formatted value per line.
// ABOUTME: Provides buffered append with optional fsync, and replay for reading an export back.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use vecdump_core::{EXPORT_PRECISION, format_general};

/// Errors that can occur while appending to or replaying an export file.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: not a number: {value:?}")]
    Parse { line: usize, value: String },
}

/// An export file opened in append mode. Existing content is never touched;
/// every value goes on its own line after whatever is already there.
pub struct AppendFile {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl AppendFile {
    /// Open (or create) the file at `path` in append mode.
    /// With `create_dirs`, missing parent directories are created first.
    pub fn open(path: &Path, create_dirs: bool) -> Result<Self, AppendError> {
        if create_dirs
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Returns the path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines appended through this handle so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Append one value in export notation followed by a newline.
    pub fn append_value(&mut self, value: f32) -> Result<(), AppendError> {
        writeln!(self.writer, "{}", format_general(value, EXPORT_PRECISION))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush buffered lines and close the file. With `sync`, the data is
    /// fsynced to disk before the handle is released.
    pub fn finish(self, sync: bool) -> Result<usize, AppendError> {
        let file = self
            .writer
            .into_inner()
            .map_err(|e| AppendError::Io(e.into_error()))?;
        if sync {
            file.sync_all()?;
        }
        Ok(self.lines)
    }

    /// Read every value of an export file back, in order.
    /// Blank lines are skipped. Returns an empty Vec for empty files.
    pub fn replay(path: &Path) -> Result<Vec<f32>, AppendError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut values = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed.parse::<f32>().map_err(|_| AppendError::Parse {
                line: idx + 1,
                value: trimmed.to_string(),
            })?;
            values.push(value);
        }

        Ok(values)
    }
}

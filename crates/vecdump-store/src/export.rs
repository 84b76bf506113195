// ABOUTME: The two export operations: append every value, or a step-sampled subset.
// ABOUTME: Validates arguments and opens the file before the first write; reports lines written.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use vecdump_core::{InputError, StepSampler, checked_prefix, planned_writes};

use crate::append::{AppendError, AppendFile};
use crate::config::ExportConfig;

/// Errors that can occur during an export. Everything except `Append` is
/// raised before any line is written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("export path is empty")]
    EmptyPath,

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: AppendError,
    },

    #[error("write failed: {0}")]
    Append(#[from] AppendError),
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Elements read from the input.
    pub requested: usize,
    /// Lines appended to the file.
    pub written: usize,
    /// Sampling step, for sampled exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
}

/// Append the first `length` values of `values` to `path`, one per line.
pub fn export_all(
    values: &[f64],
    length: usize,
    path: &Path,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError> {
    let values = checked_prefix(values, length)?;
    let file = open_target(path, config)?;

    if config.progress {
        tracing::info!("writing {} items to {}", values.len(), path.display());
    }

    let narrowed = values.iter().map(|&v| v as f32);
    let written = write_values(file, narrowed, config)?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        requested: length,
        written,
        step: None,
    })
}

/// Append the step-sampled nonzero values among the first `length` values
/// of `values` to `path`. See [`StepSampler`] for the counting rule.
pub fn export_sampled(
    values: &[f64],
    length: usize,
    path: &Path,
    step: usize,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError> {
    let values = checked_prefix(values, length)?;
    let file = open_target(path, config)?;

    if config.progress {
        tracing::info!(
            "writing {} items to {}",
            planned_writes(values, step),
            path.display()
        );
    }

    let written = write_values(file, StepSampler::sample(values, step), config)?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        requested: length,
        written,
        step: Some(step),
    })
}

fn open_target(path: &Path, config: &ExportConfig) -> Result<AppendFile, ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::EmptyPath);
    }

    AppendFile::open(path, config.create_dirs).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Append every value, then flush (and fsync when configured) before the
/// handle is released.
fn write_values<I>(
    mut file: AppendFile,
    values: I,
    config: &ExportConfig,
) -> Result<usize, ExportError>
where
    I: Iterator<Item = f32>,
{
    let mut non_finite = 0usize;
    for value in values {
        if !value.is_finite() {
            non_finite += 1;
        }
        file.append_value(value)?;
    }

    if non_finite > 0 {
        tracing::warn!(
            "{} non-finite values written to {}",
            non_finite,
            file.path().display()
        );
    }

    tracing::debug!("appended {} lines to {}", file.lines(), file.path().display());
    file.finish(config.sync).map_err(ExportError::from)
}

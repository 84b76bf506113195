// ABOUTME: Export configuration loaded from environment variables with defaults.
// ABOUTME: Controls the progress line, fsync after writing, and parent directory creation.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be one of true/false/1/0/yes/no, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Side-effect settings shared by both export operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Emit an `info` line announcing how many items are about to be written.
    pub progress: bool,
    /// fsync the file after the write loop.
    pub sync: bool,
    /// Create missing parent directories of the target path.
    pub create_dirs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            progress: true,
            sync: true,
            create_dirs: false,
        }
    }
}

impl ExportConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Environment variables:
    /// - VECDUMP_PROGRESS: log the progress line (default: true)
    /// - VECDUMP_SYNC: fsync after writing (default: true)
    /// - VECDUMP_CREATE_DIRS: create missing parent directories (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            progress: flag(&lookup, "VECDUMP_PROGRESS", defaults.progress)?,
            sync: flag(&lookup, "VECDUMP_SYNC", defaults.sync)?,
            create_dirs: flag(&lookup, "VECDUMP_CREATE_DIRS", defaults.create_dirs)?,
        })
    }
}

fn flag<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name).filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}

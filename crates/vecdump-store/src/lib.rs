// ABOUTME: File side of vecdump: the append-only export file and the two export operations.
// ABOUTME: Re-exports the exporter entry points, configuration, and error types.

pub mod append;
pub mod config;
pub mod export;

pub use append::{AppendError, AppendFile};
pub use config::{ConfigError, ExportConfig};
pub use export::{ExportError, ExportReport, export_all, export_sampled};

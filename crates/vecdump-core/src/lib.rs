// ABOUTME: Core library for vecdump: pure logic shared by the exporter and the CLI.
// ABOUTME: Covers general-notation float formatting, the step sampler, and argument checks.

pub mod format;
pub mod input;
pub mod sample;

pub use format::{EXPORT_PRECISION, format_general};
pub use input::{InputError, checked_prefix, length_from_host, step_from_host};
pub use sample::{StepSampler, planned_writes};

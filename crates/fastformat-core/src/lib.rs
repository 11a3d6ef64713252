//! Core library for fastformat.
//!
//! A deterministic, idempotent, configurable typographic normalization
//! pipeline for manuscript prose: smart quotes, dash disambiguation,
//! ellipsis normalization, whitespace and punctuation cleanup, and
//! configurable dialogue conventions.
//!
//! # Modules
//!
//! - [`options`] - `FormatOptions` and named presets
//! - [`rules`] - the individual pure-text rewrite rules
//! - [`pipeline`] - the fixed-order driver
//! - [`report`] - per-rule change reporting
//! - [`diff`] - unified diff for human review
//! - [`config`] - configuration loading and discovery
//! - [`error`] - error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use fastformat_core::{Preset, apply};
//!
//! let opts = Preset::Narrative.options();
//! let (formatted, report) = apply("- \"Wait...\" he said", &opts);
//! assert!(formatted.starts_with("— "));
//! assert!(report.any_changed());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod rules;

pub use config::{Config, ConfigLoader, LogLevel};
pub use diff::unified_diff;
pub use error::{ConfigError, ConfigResult, OptionsError, OptionsResult};
pub use options::{
    AsideDash, DialogueDash, FormatOptions, PRESET_NAMES, Preset, QuoteStyle, RangeDash,
};
pub use pipeline::apply;
pub use report::TransformReport;

/// Default maximum input size accepted by callers (5 MiB).
///
/// The pipeline itself has no limit; this is the guard CLI-style callers
/// apply before reading a manuscript into memory.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

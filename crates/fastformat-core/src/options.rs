//! Formatting options and presets.
//!
//! [`FormatOptions`] is a flat, immutable set of toggles selecting which
//! normalization rules run and with what stylistic variant. Every flag is
//! independently toggleable; rule execution order is fixed regardless of
//! which subset is enabled (see [`crate::pipeline`]).
//!
//! Three named [`Preset`]s cover common house styles. Unknown preset names
//! are a configuration error, never silently defaulted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Quotation mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum QuoteStyle {
    /// Straight ASCII quotes (" ').
    Straight,
    /// Curly typographic quotes (“ ” ‘ ’).
    Typographic,
}

impl QuoteStyle {
    /// Returns the style as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Typographic => "typographic",
        }
    }
}

impl std::fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dash treatment for numeric ranges (`10-20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RangeDash {
    /// Leave numeric ranges untouched.
    None,
    /// Rewrite `10-20` as `10–20` (en dash, no surrounding spaces).
    EnDash,
}

/// Dash treatment for mid-sentence asides (`word - word`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AsideDash {
    /// Leave aside hyphens untouched.
    None,
    /// Rewrite a spaced mid-line hyphen as a spaced em dash.
    EmDash,
}

/// Dash treatment for line-leading dialogue markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DialogueDash {
    /// Keep the hyphen convention (`- Hello`).
    Hyphen,
    /// Convert to the em-dash convention (`— Hello`).
    EmDash,
}

/// Options controlling the normalization pipeline.
///
/// Construct via a [`Preset`], [`Default`], or field-by-field. The struct
/// deserializes from config files with every field optional (missing fields
/// take the default-preset value).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Collapse runs of spaces/tabs to one and strip trailing whitespace
    /// per line. Leading line indentation is preserved verbatim.
    pub normalize_whitespace: bool,
    /// Cap consecutive blank lines at `max_blank_lines`.
    pub compress_blank_lines: bool,
    /// Maximum number of fully blank lines allowed between paragraphs.
    pub max_blank_lines: usize,
    /// No space before `,.;:!?`; exactly one space after when a word
    /// character follows.
    pub normalize_punctuation_spacing: bool,
    /// Collapse `...`, `. . .`, and 4+ dots into a single `…` glyph.
    pub normalize_ellipsis: bool,
    /// Collapse `!!` → `!` and `??` → `?`.
    pub collapse_repeated_punctuation: bool,
    /// Numeric range dash treatment.
    pub numeric_range_dash: RangeDash,
    /// Aside (mid-sentence) dash treatment.
    pub aside_dash: AsideDash,
    /// Quote style to convert toward.
    pub quote_style: QuoteStyle,
    /// Dialogue marker treatment for line-leading hyphens.
    pub dialogue_dash: DialogueDash,
    /// Heuristically uppercase the first letter after sentence-ending
    /// punctuation. Off in every preset: the heuristic does not
    /// understand abbreviations ("Dr. Smith") and will over-capitalize.
    pub capitalize_sentences: bool,
    /// Insert a non-breaking space between a number and a recognized
    /// unit; remove space before `%`.
    pub tidy_units: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Preset::Default.options()
    }
}

/// Named option bundles tuned for manuscript genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Preset {
    /// Safe general-purpose cleanup: typographic quotes, em-dash
    /// dialogue, en-dash ranges, capitalization off.
    Default,
    /// Dialogue-heavy fiction. Currently identical to `default`; kept
    /// distinct so house styles can diverge without breaking callers.
    Narrative,
    /// Formal/reference house style: straight quotes, hyphen dialogue,
    /// no aside conversion.
    Formal,
}

/// Valid preset names, for error messages and CLI listings.
pub const PRESET_NAMES: &[&str] = &["default", "narrative", "formal"];

impl Preset {
    /// Returns the preset name as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Narrative => "narrative",
            Self::Formal => "formal",
        }
    }

    /// Build the [`FormatOptions`] this preset names.
    pub const fn options(&self) -> FormatOptions {
        match self {
            Self::Default | Self::Narrative => FormatOptions {
                normalize_whitespace: true,
                compress_blank_lines: true,
                max_blank_lines: 1,
                normalize_punctuation_spacing: true,
                normalize_ellipsis: true,
                collapse_repeated_punctuation: true,
                numeric_range_dash: RangeDash::EnDash,
                aside_dash: AsideDash::EmDash,
                quote_style: QuoteStyle::Typographic,
                dialogue_dash: DialogueDash::EmDash,
                capitalize_sentences: false,
                tidy_units: true,
            },
            Self::Formal => FormatOptions {
                normalize_whitespace: true,
                compress_blank_lines: true,
                max_blank_lines: 1,
                normalize_punctuation_spacing: true,
                normalize_ellipsis: true,
                collapse_repeated_punctuation: true,
                numeric_range_dash: RangeDash::EnDash,
                aside_dash: AsideDash::None,
                quote_style: QuoteStyle::Straight,
                dialogue_dash: DialogueDash::Hyphen,
                capitalize_sentences: false,
                tidy_units: true,
            },
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "narrative" => Ok(Self::Narrative),
            "formal" => Ok(Self::Formal),
            other => Err(OptionsError::UnknownPreset {
                name: other.to_string(),
                available: PRESET_NAMES.join(", "),
            }),
        }
    }
}

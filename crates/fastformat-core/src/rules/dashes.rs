//! Dash disambiguation: numeric ranges, asides, dialogue markers.
//!
//! Three distinct hyphen meanings get three distinct rules, applied in
//! this order so they never fight over the same token: numeric ranges
//! first (digit context), then mid-line asides (spaced, never at line
//! start), then line-leading dialogue markers. Hyphenated words
//! (`well-known`) match none of them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// En dash, used for numeric ranges.
pub const EN_DASH: char = '–';

/// Em dash, used for asides and dialogue markers.
pub const EM_DASH: char = '—';

/// Regex for a digit followed by a hyphen, optional surrounding whitespace.
///
/// The right-hand digit is checked in the replacement closure rather than
/// captured, so chained ranges (`10-20-30`) convert in a single pass: a
/// captured digit would be consumed by the match and unavailable as the
/// left neighbor of the next hyphen.
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)[ \t]*-[ \t]*").expect("valid regex"));

/// Regex for a spaced hyphen preceded by a non-space character.
static ASIDE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\S) - ").expect("valid regex"));

/// Regex for a line-leading hyphen marker (indentation allowed).
static DIALOGUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)-[ \t]+").expect("valid regex"));

/// Rewrite `10-20` as `10–20` (en dash, no surrounding spaces).
///
/// Applies only when both neighbors are digits, so hyphenated words and
/// dialogue markers are never touched.
pub fn numeric_range(text: &str) -> String {
    RANGE_RE
        .replace_all(text, |caps: &Captures| {
            let followed_by_digit = caps.get(0).is_some_and(|m| {
                text[m.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit())
            });
            if followed_by_digit {
                format!("{}{EN_DASH}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Rewrite a mid-line ` - ` as ` — `.
///
/// The hyphen must be surrounded by single spaces and preceded by a
/// non-space character, which excludes line-leading dialogue markers.
/// A spaced hyphen between digits is a numeric-range concern and is
/// skipped here.
pub fn aside(text: &str) -> String {
    ASIDE_RE
        .replace_all(text, |caps: &Captures| {
            if digit_range_context(text, caps) {
                caps[0].to_string()
            } else {
                format!("{} {EM_DASH} ", &caps[1])
            }
        })
        .into_owned()
}

/// True when the spaced hyphen sits between two digits.
fn digit_range_context(haystack: &str, caps: &Captures) -> bool {
    let before_is_digit = caps[1].chars().next().is_some_and(|c| c.is_ascii_digit());
    let after_is_digit = caps.get(0).is_some_and(|m| {
        haystack[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    });
    before_is_digit && after_is_digit
}

/// Rewrite a line-leading `- ` dialogue marker as `— `.
///
/// Indentation before the marker is preserved. The hyphen variant of the
/// dialogue convention leaves text untouched, so the caller simply skips
/// this rule.
pub fn dialogue(text: &str) -> String {
    DIALOGUE_RE
        .replace_all(text, format!("${{1}}{EM_DASH} "))
        .into_owned()
}

//! The normalization rule set.
//!
//! Each rule is a pure, idempotent `&str -> String` transformer concerned
//! with exactly one typographic convention. Rules never touch text regions
//! outside their concern (whitespace collapsing never alters leading
//! indentation, dash rules never rewrite hyphenated words).
//!
//! Execution order is fixed and lives in [`crate::pipeline`]; later rules
//! assume earlier rules' normalized whitespace, so the regexes here are
//! written against upstream-normalized input but stay safe standalone.

pub mod capitalize;
pub mod dashes;
pub mod line_endings;
pub mod punctuation;
pub mod quotes;
pub mod units;
pub mod whitespace;

/// Canonical line-terminator normalization (always first).
pub const LINE_ENDINGS: &str = "line-endings";
/// Trailing horizontal whitespace removal.
pub const TRAILING_SPACE: &str = "trailing-space";
/// Interior multi-space collapse (indentation preserved).
pub const MULTI_SPACE: &str = "multi-space";
/// Blank-line run compression.
pub const BLANK_LINES: &str = "blank-lines";
/// Spacing around `,.;:!?`.
pub const PUNCTUATION_SPACING: &str = "punctuation-spacing";
/// Dot-run to `…` conversion.
pub const ELLIPSIS: &str = "ellipsis";
/// `!!`/`??` collapse.
pub const REPEATED_PUNCTUATION: &str = "repeated-punctuation";
/// Digit-hyphen-digit to en dash.
pub const NUMERIC_RANGE_DASH: &str = "numeric-range-dash";
/// Spaced mid-line hyphen to em dash.
pub const ASIDE_DASH: &str = "aside-dash";
/// Line-leading dialogue marker conversion.
pub const DIALOGUE_DASH: &str = "dialogue-dash";
/// Quote style conversion and word-internal apostrophes.
pub const QUOTES: &str = "quotes";
/// Heuristic sentence capitalization.
pub const CAPITALIZE_SENTENCES: &str = "capitalize-sentences";
/// Number-unit non-breaking space and `%` tightening.
pub const UNITS: &str = "units";

/// Rule names in pipeline execution order.
pub const ALL_RULES: &[&str] = &[
    LINE_ENDINGS,
    TRAILING_SPACE,
    MULTI_SPACE,
    BLANK_LINES,
    PUNCTUATION_SPACING,
    ELLIPSIS,
    REPEATED_PUNCTUATION,
    NUMERIC_RANGE_DASH,
    ASIDE_DASH,
    DIALOGUE_DASH,
    QUOTES,
    CAPITALIZE_SENTENCES,
    UNITS,
];

/// One-line description of a rule, for CLI listings.
pub fn describe(rule: &str) -> &'static str {
    match rule {
        LINE_ENDINGS => "convert CRLF/CR line endings to LF, strip a leading BOM",
        TRAILING_SPACE => "strip spaces and tabs before line ends",
        MULTI_SPACE => "collapse interior space runs to one (indentation kept)",
        BLANK_LINES => "cap consecutive blank lines between paragraphs",
        PUNCTUATION_SPACING => "no space before ,.;:!? and one space after",
        ELLIPSIS => "collapse dot runs (spaced or not) into a single … glyph",
        REPEATED_PUNCTUATION => "collapse !! and ?? to a single mark",
        NUMERIC_RANGE_DASH => "10-20 becomes 10–20 (en dash, no spaces)",
        ASIDE_DASH => "a spaced mid-line hyphen becomes a spaced em dash",
        DIALOGUE_DASH => "a line-leading hyphen marker becomes an em dash",
        QUOTES => "convert quote style; word apostrophes always become ’",
        CAPITALIZE_SENTENCES => "uppercase the first letter after sentence ends",
        UNITS => "non-breaking space before units, no space before %",
        _ => "unknown rule",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_have_descriptions() {
        for rule in ALL_RULES {
            assert_ne!(describe(rule), "unknown rule", "{rule}");
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in ALL_RULES {
            assert!(seen.insert(rule), "duplicate rule name {rule}");
        }
    }
}

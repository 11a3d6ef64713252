//! The normalization pipeline driver.
//!
//! Applies every enabled rule in a fixed order and records a per-rule
//! change flag. The order is load-bearing: later rules assume earlier
//! rules' normalized whitespace (spaced dot runs reach the ellipsis rule
//! already tightened, dash rules see collapsed spacing), so it never
//! varies with the enabled subset.
//!
//! `apply` is a total function over Unicode strings: malformed or messy
//! input is never rejected, and the same `(text, options)` pair always
//! produces the same output.

use crate::options::{AsideDash, DialogueDash, FormatOptions, RangeDash};
use crate::report::TransformReport;
use crate::rules;

/// Run the pipeline over `text` with the given options.
///
/// Returns the formatted text and a report of which rules changed it.
/// Empty input short-circuits to empty output with an empty report.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn apply(text: &str, options: &FormatOptions) -> (String, TransformReport) {
    let mut report = TransformReport::new();
    if text.is_empty() {
        return (String::new(), report);
    }

    // Canonical line endings are a precondition for every other rule's
    // regexes, so this one is not gated by an option.
    let mut current = step(text, &mut report, rules::LINE_ENDINGS, |t| {
        rules::line_endings::normalize(t)
    });

    if options.normalize_whitespace {
        current = step(&current, &mut report, rules::TRAILING_SPACE, |t| {
            rules::whitespace::trim_trailing(t)
        });
        current = step(&current, &mut report, rules::MULTI_SPACE, |t| {
            rules::whitespace::collapse_spaces(t)
        });
    }
    if options.compress_blank_lines {
        let max = options.max_blank_lines;
        current = step(&current, &mut report, rules::BLANK_LINES, |t| {
            rules::whitespace::compress_blank_lines(t, max)
        });
    }
    if options.normalize_punctuation_spacing {
        current = step(&current, &mut report, rules::PUNCTUATION_SPACING, |t| {
            rules::punctuation::normalize_spacing(t)
        });
    }
    if options.normalize_ellipsis {
        current = step(&current, &mut report, rules::ELLIPSIS, |t| {
            rules::punctuation::normalize_ellipsis(t)
        });
    }
    if options.collapse_repeated_punctuation {
        current = step(&current, &mut report, rules::REPEATED_PUNCTUATION, |t| {
            rules::punctuation::collapse_repeated(t)
        });
    }
    if options.numeric_range_dash == RangeDash::EnDash {
        current = step(&current, &mut report, rules::NUMERIC_RANGE_DASH, |t| {
            rules::dashes::numeric_range(t)
        });
    }
    if options.aside_dash == AsideDash::EmDash {
        current = step(&current, &mut report, rules::ASIDE_DASH, |t| {
            rules::dashes::aside(t)
        });
    }
    if options.dialogue_dash == DialogueDash::EmDash {
        current = step(&current, &mut report, rules::DIALOGUE_DASH, |t| {
            rules::dashes::dialogue(t)
        });
    }

    // Quote conversion always runs; the enum picks the direction.
    let style = options.quote_style;
    current = step(&current, &mut report, rules::QUOTES, |t| {
        rules::quotes::convert(t, style)
    });

    if options.capitalize_sentences {
        current = step(&current, &mut report, rules::CAPITALIZE_SENTENCES, |t| {
            rules::capitalize::capitalize_sentences(t)
        });
    }
    if options.tidy_units {
        current = step(&current, &mut report, rules::UNITS, |t| {
            rules::units::tidy(t)
        });
    }

    (current, report)
}

/// Apply one rule, record whether it changed the text, return the result.
fn step(
    current: &str,
    report: &mut TransformReport,
    name: &'static str,
    rule: impl Fn(&str) -> String,
) -> String {
    let next = rule(current);
    let changed = next != current;
    if changed {
        tracing::debug!(rule = name, "rule changed text");
    }
    report.record(name, changed);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Preset, QuoteStyle};

    fn defaults() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn empty_input_empty_report() {
        let (out, report) = apply("", &defaults());
        assert_eq!(out, "");
        assert!(report.is_empty());
    }

    #[test]
    fn whitespace_collapse() {
        let (out, _) = apply("a   b", &defaults());
        assert_eq!(out, "a b");
    }

    #[test]
    fn indentation_preserved_through_pipeline() {
        let (out, _) = apply("    a   b", &defaults());
        assert_eq!(out, "    a b");
    }

    #[test]
    fn blank_line_cap() {
        let opts = FormatOptions {
            max_blank_lines: 1,
            ..defaults()
        };
        let (out, _) = apply("a\n\n\n\n\nb", &opts);
        assert_eq!(out, "a\n\nb");
    }

    #[test]
    fn ellipsis_glyph_not_dots() {
        let (out, _) = apply("Wait...", &defaults());
        assert!(out.contains('…'));
        assert!(!out.contains("..."));
    }

    #[test]
    fn numeric_range_en_dash() {
        let (out, _) = apply("ages 10-20", &defaults());
        assert_eq!(out, "ages 10–20");
    }

    #[test]
    fn chained_range_converts_fully_in_one_apply() {
        let (once, _) = apply("dated 10-20-30", &defaults());
        assert_eq!(once, "dated 10–20–30");
        let (twice, report) = apply(&once, &defaults());
        assert_eq!(twice, once);
        assert!(!report.any_changed());
    }

    #[test]
    fn adjacent_apostrophes_stay_apostrophes() {
        let (out, _) = apply("rock'n'roll", &defaults());
        assert_eq!(out, "rock’n’roll");
    }

    #[test]
    fn dialogue_marker_em_dash() {
        let (out, _) = apply("- Hello there", &defaults());
        assert!(out.starts_with("— "));
    }

    #[test]
    fn word_apostrophe_curly_in_both_styles() {
        for style in [QuoteStyle::Typographic, QuoteStyle::Straight] {
            let opts = FormatOptions {
                quote_style: style,
                ..defaults()
            };
            let (out, _) = apply("don't", &opts);
            assert!(out.contains('’'), "{style}");
            assert!(!out.contains('\''), "{style}");
        }
    }

    #[test]
    fn report_reflects_changes() {
        let (_, report) = apply("a   b", &defaults());
        assert_eq!(report.changed(rules::MULTI_SPACE), Some(true));
        assert_eq!(report.changed(rules::UNITS), Some(false));
        assert!(report.any_changed());
    }

    #[test]
    fn clean_text_reports_no_changes() {
        let (out, report) = apply("Already clean.\n", &defaults());
        assert_eq!(out, "Already clean.\n");
        assert!(!report.any_changed());
        // Every enabled rule still executed
        assert_eq!(report.len(), 12);
    }

    #[test]
    fn disabled_rules_do_not_run() {
        let opts = FormatOptions {
            tidy_units: false,
            capitalize_sentences: false,
            ..defaults()
        };
        let (_, report) = apply("5 kg", &opts);
        assert_eq!(report.changed(rules::UNITS), None);
        assert_eq!(report.changed(rules::CAPITALIZE_SENTENCES), None);
    }

    #[test]
    fn idempotent_across_presets() {
        let messy = "-  \"Where   were you?\"  he asked... \
                     \"About 10-20 minutes\"  - came the reply!!\n\n\n\nfim.";
        for preset in [Preset::Default, Preset::Narrative, Preset::Formal] {
            let opts = preset.options();
            let (once, _) = apply(messy, &opts);
            let (twice, report) = apply(&once, &opts);
            assert_eq!(once, twice, "{preset}");
            assert!(!report.any_changed(), "{preset}");
        }
    }

    #[test]
    fn narrative_scenario() {
        let input =
            "- \"Onde você esteve?\" ela perguntou... \"Foram 10-20 minutos\"  - respondeu.";
        let opts = Preset::Narrative.options();
        let (out, _) = apply(input, &opts);
        // Line-leading marker becomes an em dash; the mid-line one is an aside.
        assert!(out.starts_with("— "));
        assert!(out.contains(" — respondeu."));
        // Curly quotes, single ellipsis, en-dash range, single spacing.
        assert!(out.contains("“Onde você esteve?”"));
        assert!(out.contains("perguntou…"));
        assert!(out.contains("10–20"));
        assert!(!out.contains("  "));
        assert!(!out.contains("..."));
    }

    #[test]
    fn capitalization_opt_in() {
        let opts = FormatOptions {
            capitalize_sentences: true,
            ..defaults()
        };
        let (out, _) = apply("one. two.", &opts);
        assert_eq!(out, "One. Two.");
    }

    #[test]
    fn mixed_line_endings_always_normalized() {
        let opts = FormatOptions {
            normalize_whitespace: false,
            compress_blank_lines: false,
            normalize_punctuation_spacing: false,
            normalize_ellipsis: false,
            collapse_repeated_punctuation: false,
            numeric_range_dash: RangeDash::None,
            aside_dash: AsideDash::None,
            dialogue_dash: DialogueDash::Hyphen,
            capitalize_sentences: false,
            tidy_units: false,
            ..defaults()
        };
        let (out, report) = apply("a\r\nb", &opts);
        assert_eq!(out, "a\nb");
        // Only line endings and quote conversion executed.
        assert_eq!(report.len(), 2);
    }
}

//! Number-unit spacing.
//!
//! A number followed by a recognized unit abbreviation gets a non-breaking
//! space so the pair never splits across a line break. `%` is different:
//! house style is no space at all between a number and the percent sign.
//!
//! The unit list is a fixed allow-list; anything else stays untouched so
//! prose like "10 minutes" is never rewritten.

use std::sync::LazyLock;

use regex::Regex;

/// Non-breaking space inserted between number and unit.
pub const NBSP: char = '\u{00A0}';

/// Regex for a digit, whitespace, then a recognized unit token.
///
/// Longer alternatives listed first; the trailing `\b` keeps `5 ml` from
/// matching inside `5 mlb`.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)[ \t]+(°C|°F|min|mg|kg|km|kW|cm|mm|ml|g|h|l|L|m|s)\b")
        .expect("valid regex")
});

/// Regex for whitespace between a digit and a percent sign.
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)[ \t]+%").expect("valid regex"));

/// Tighten number-unit pairs.
pub fn tidy(text: &str) -> String {
    let out = UNIT_RE.replace_all(text, format!("${{1}}{NBSP}${{2}}"));
    PERCENT_RE.replace_all(&out, "${1}%").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_gets_nbsp() {
        assert_eq!(tidy("weighs 5 kg"), "weighs 5\u{00A0}kg");
        assert_eq!(tidy("ran 10 km today"), "ran 10\u{00A0}km today");
    }

    #[test]
    fn degrees_supported() {
        assert_eq!(tidy("at 20 °C"), "at 20\u{00A0}°C");
    }

    #[test]
    fn percent_loses_space_entirely() {
        assert_eq!(tidy("rose 5 %"), "rose 5%");
        assert_eq!(tidy("rose 5%"), "rose 5%");
    }

    #[test]
    fn word_boundary_respected() {
        assert_eq!(tidy("5 meters"), "5 meters");
        assert_eq!(tidy("10 minutes"), "10 minutes");
    }

    #[test]
    fn no_number_no_change() {
        assert_eq!(tidy("some kg of flour"), "some kg of flour");
    }

    #[test]
    fn idempotent() {
        let once = tidy("5 kg at 20 °C and 3 %");
        assert_eq!(tidy(&once), once);
    }
}

//! Unified diff between original and formatted text.
//!
//! Review output only: callers present the diff so a human can accept or
//! reject the automated changes. Nothing here affects the formatted text.

use similar::TextDiff;

/// Produce a unified diff (3 lines of context) comparing `original` to
/// `formatted`.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(original: &str, formatted: &str) -> String {
    if original == formatted {
        return String::new();
    }
    TextDiff::from_lines(original, formatted)
        .unified_diff()
        .context_radius(3)
        .header("original", "formatted")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_empty_diff() {
        assert_eq!(unified_diff("same\n", "same\n"), "");
    }

    #[test]
    fn changed_line_appears_in_diff() {
        let diff = unified_diff("a   b\nkeep\n", "a b\nkeep\n");
        assert!(diff.contains("-a   b"));
        assert!(diff.contains("+a b"));
        assert!(diff.contains("--- original"));
        assert!(diff.contains("+++ formatted"));
    }

    #[test]
    fn handles_differing_line_counts() {
        let diff = unified_diff("a\n\n\n\nb\n", "a\n\nb\n");
        assert!(diff.contains("@@"));
    }
}

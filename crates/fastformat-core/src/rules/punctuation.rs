//! Punctuation spacing, ellipsis, and repeated-mark rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex for horizontal whitespace before sentence punctuation.
static SPACE_BEFORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+([,.;:!?])").expect("valid regex"));

/// Regex for multiple spaces after sentence punctuation.
static MULTI_AFTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,.;:!?])[ \t]{2,}").expect("valid regex"));

/// Regex for punctuation glued to a following word character.
static MISSING_AFTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,.;:!?])(\w)").expect("valid regex"));

/// Regex for a run of three or more dots, optionally space-separated.
static DOT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:[ \t]*\.){2,}").expect("valid regex"));

/// Regex for whitespace before an ellipsis glyph.
static SPACE_BEFORE_ELLIPSIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+…").expect("valid regex"));

/// Regex for an ellipsis glued to a following letter.
static ELLIPSIS_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"…(\p{L})").expect("valid regex"));

/// Regex for repeated exclamation marks.
static BANGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").expect("valid regex"));

/// Regex for repeated question marks.
static QUESTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("valid regex"));

/// Normalize spacing around `,.;:!?`.
///
/// Whitespace before the mark is removed; exactly one space follows when
/// the next character is a word character. Punctuation between digits
/// (decimals `3.14`, thousands `10,000`, clock times `10:30`) is left
/// alone — splitting a number is never what the author meant.
pub fn normalize_spacing(text: &str) -> String {
    let out = SPACE_BEFORE_RE.replace_all(text, "$1");
    let out = MULTI_AFTER_RE.replace_all(&out, "$1 ");
    let snapshot = out.to_string();
    MISSING_AFTER_RE
        .replace_all(&snapshot, |caps: &Captures| {
            if between_digits(&snapshot, caps) {
                caps[0].to_string()
            } else {
                format!("{} {}", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

/// True when the matched punctuation sits directly between two digits.
fn between_digits(haystack: &str, caps: &Captures) -> bool {
    let Some(m) = caps.get(0) else { return false };
    let after_is_digit = caps[2].chars().next().is_some_and(|c| c.is_ascii_digit());
    let before_is_digit = haystack[..m.start()]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit());
    before_is_digit && after_is_digit
}

/// Collapse dot runs into a single `…` glyph.
///
/// Three or more periods (spaced, as in `. . .`, or not) become one
/// ellipsis; any space before it is removed and one space is inserted
/// after it when a letter follows directly. Quotes and brackets after the
/// glyph get no inserted space.
pub fn normalize_ellipsis(text: &str) -> String {
    let out = DOT_RUN_RE.replace_all(text, "…");
    let out = SPACE_BEFORE_ELLIPSIS_RE.replace_all(&out, "…");
    ELLIPSIS_WORD_RE.replace_all(&out, "… $1").into_owned()
}

/// Collapse `!!` and `??` runs to a single mark.
///
/// Dot runs are the ellipsis rule's concern, not this one's.
pub fn collapse_repeated(text: &str) -> String {
    let out = BANGS_RE.replace_all(text, "!");
    QUESTIONS_RE.replace_all(&out, "?").into_owned()
}

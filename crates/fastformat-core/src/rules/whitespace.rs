//! Horizontal whitespace and blank-line rules.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for horizontal whitespace before a line end.
static TRAILING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));

/// Regex for runs of two or more spaces/tabs.
static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Remove spaces and tabs immediately before a line terminator or end of
/// string.
pub fn trim_trailing(text: &str) -> String {
    TRAILING_RE.replace_all(text, "").into_owned()
}

/// Collapse interior runs of spaces/tabs to a single space.
///
/// Leading indentation (the space/tab prefix of each line) is preserved
/// verbatim; only the portion of the line after it is collapsed.
pub fn collapse_spaces(text: &str) -> String {
    text.split('\n')
        .map(collapse_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_line(line: &str) -> String {
    match line.find(|c| c != ' ' && c != '\t') {
        Some(body_start) => {
            let (indent, body) = line.split_at(body_start);
            format!("{indent}{}", MULTI_SPACE_RE.replace_all(body, " "))
        }
        // All-whitespace line; trailing trim owns it
        None => line.to_string(),
    }
}

/// Cap runs of consecutive blank lines.
///
/// Runs of `max_blank_lines + 2` or more line breaks are replaced with
/// exactly `max_blank_lines + 1` breaks, leaving at most `max_blank_lines`
/// fully blank lines between paragraphs.
pub fn compress_blank_lines(text: &str, max_blank_lines: usize) -> String {
    let run = Regex::new(&format!(r"\n{{{},}}", max_blank_lines + 2)).expect("valid regex");
    run.replace_all(text, "\n".repeat(max_blank_lines + 1))
        .into_owned()
}

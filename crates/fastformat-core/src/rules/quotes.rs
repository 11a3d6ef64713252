//! Quote style conversion.
//!
//! Word-internal apostrophes (`don't`) always become a right single curly
//! mark, whatever the target style. Full conversion to typographic form
//! assigns curly pairs by a sequential alternating scan: first straight
//! quote opens, second closes, and so on, doubles and singles tracked
//! independently. An odd number of quote characters in the input leaves
//! one dangling converted quote — a pass-through of malformed input, not
//! something this rule tries to repair. Genuinely nested same-type quotes
//! defeat the alternation for the same reason.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::options::QuoteStyle;

/// Regex for a letter followed by a straight apostrophe.
///
/// The trailing letter is checked in the replacement closure rather than
/// captured: capturing it would consume it, and the second apostrophe of
/// `rock'n'roll` would lose its left neighbor and fall through to the
/// alternating-quote scan.
static WORD_APOSTROPHE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})'").expect("valid regex"));

/// Convert quotes in `text` toward the requested style.
pub fn convert(text: &str, style: QuoteStyle) -> String {
    match style {
        QuoteStyle::Typographic => to_typographic(text),
        QuoteStyle::Straight => to_straight(text),
    }
}

/// Replace word-internal straight apostrophes with `’`.
fn curl_apostrophes(text: &str) -> String {
    WORD_APOSTROPHE_RE
        .replace_all(text, |caps: &Captures| {
            let followed_by_letter = caps.get(0).is_some_and(|m| {
                text[m.end()..]
                    .chars()
                    .next()
                    .is_some_and(char::is_alphabetic)
            });
            if followed_by_letter {
                format!("{}’", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn to_typographic(text: &str) -> String {
    // Apostrophes first, so the alternating scan only sees real quotes.
    let text = curl_apostrophes(text);
    let mut out = String::with_capacity(text.len());
    let mut double_open = true;
    let mut single_open = true;
    for ch in text.chars() {
        match ch {
            '"' => {
                out.push(if double_open { '“' } else { '”' });
                double_open = !double_open;
            }
            '\'' => {
                out.push(if single_open { '‘' } else { '’' });
                single_open = !single_open;
            }
            _ => out.push(ch),
        }
    }
    out
}

fn to_straight(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '“' | '”' | '„' | '‟' => out.push('"'),
            '‘' | '’' | '‚' | '‛' => out.push('\''),
            _ => out.push(ch),
        }
    }
    // Word-internal marks stay curly even in straight style.
    curl_apostrophes(&out)
}

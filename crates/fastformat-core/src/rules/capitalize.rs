//! Heuristic sentence capitalization.
//!
//! Uppercases the first letter at the start of the text and after each
//! sentence boundary: one of `.!?…`, optionally followed by closing
//! quotes/brackets, followed by whitespace. Digits and symbols between
//! the boundary and the first letter are skipped.
//!
//! This is a heuristic. It does not understand abbreviations ("Dr.
//! smith" gets capitalized) and that is a documented limitation, not a
//! bug — which is why every preset ships with this rule off.

/// Uppercase the first letter of each detected sentence.
pub fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Armed at text start: the next letter seen is uppercased.
    let mut armed = true;
    // A terminator was seen; whitespace after it re-arms.
    let mut boundary = false;

    for ch in text.chars() {
        if armed && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            armed = false;
            boundary = false;
            continue;
        }
        match ch {
            '.' | '!' | '?' | '…' => {
                boundary = true;
                armed = false;
            }
            c if is_closer(c) => {}
            c if c.is_whitespace() => {
                if boundary {
                    armed = true;
                }
            }
            _ => {
                // Digits and symbols: skipped while armed, otherwise
                // they end any pending boundary.
                if !armed {
                    boundary = false;
                }
            }
        }
        out.push(ch);
    }
    out
}

const fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '”' | '’' | ')' | ']' | '}' | '»'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_text_capitalized() {
        assert_eq!(capitalize_sentences("hello there"), "Hello there");
    }

    #[test]
    fn after_each_terminator() {
        assert_eq!(
            capitalize_sentences("one. two! three? four"),
            "One. Two! Three? Four"
        );
    }

    #[test]
    fn after_ellipsis() {
        assert_eq!(capitalize_sentences("wait… go"), "Wait… Go");
    }

    #[test]
    fn closing_quote_between_terminator_and_space() {
        assert_eq!(
            capitalize_sentences("“stop.” she ran"),
            "“Stop.” She ran"
        );
    }

    #[test]
    fn digits_skipped_until_first_letter() {
        assert_eq!(
            capitalize_sentences("done. 42 miles later"),
            "Done. 42 Miles later"
        );
    }

    #[test]
    fn no_boundary_without_whitespace() {
        assert_eq!(capitalize_sentences("file.txt"), "File.txt");
    }

    #[test]
    fn known_abbreviation_limitation() {
        // Heuristic over-capitalizes after abbreviations; documented.
        assert_eq!(capitalize_sentences("dr. smith"), "Dr. Smith");
    }

    #[test]
    fn already_capitalized_unchanged() {
        let text = "One. Two! Three.";
        assert_eq!(capitalize_sentences(text), text);
    }

    #[test]
    fn idempotent() {
        let once = capitalize_sentences("a. b? “c.” d… 42 e");
        assert_eq!(capitalize_sentences(&once), once);
    }
}

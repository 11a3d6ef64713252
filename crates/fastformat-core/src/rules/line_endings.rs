//! Line-terminator normalization.
//!
//! Manuscript sources arrive with mixed CRLF/CR/LF endings (and often a
//! UTF-8 BOM from DOCX/TXT exports). Everything downstream assumes LF, so
//! this rule always runs first.

/// Convert all line terminators to LF and strip a leading UTF-8 BOM.
pub fn normalize(text: &str) -> String {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(normalize("\u{FEFF}hello"), "hello");
    }

    #[test]
    fn lone_cr_at_end() {
        assert_eq!(normalize("line\r"), "line\n");
    }

    #[test]
    fn idempotent() {
        let once = normalize("a\r\nb\r");
        assert_eq!(normalize(&once), once);
    }
}

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Writes the wrapped text with XML special characters replaced by entities.
///
/// Characters XML 1.0 does not allow at all, such as most C0 controls, are
/// replaced with U+FFFD.
pub struct Escaped<'s>(pub &'s str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut rest = self.0;

        while let Some((idx, ch)) = rest.char_indices().find(|&(_, ch)| needs_escape(ch)) {
            f.write_str(&rest[..idx])?;

            let replacement = match ch {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&apos;",
                _ => "\u{FFFD}",
            };

            f.write_str(replacement)?;
            rest = &rest[idx + ch.len_utf8()..];
        }

        f.write_str(rest)
    }
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'') || !is_xml_char(ch)
}

/// The `Char` production of XML 1.0.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(text: &str) -> String {
        Escaped(text).to_string()
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape("1500"), "1500");
        assert_eq!(escape("정복 중인 레벨"), "정복 중인 레벨");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn special_characters() {
        assert_eq!(
            escape(r#"<b>Tom & "Jerry's"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&apos;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn illegal_characters_replaced() {
        assert_eq!(escape("a\u{1}b"), "a\u{FFFD}b");
        assert_eq!(escape("\u{0}\u{8}\u{B}\u{C}\u{1F}"), "\u{FFFD}".repeat(5));
        assert_eq!(escape("\u{FFFE}\u{FFFF}"), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn allowed_whitespace_and_astral_kept() {
        assert_eq!(escape("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(escape("🏆 1위"), "🏆 1위");
    }

    #[test]
    fn multibyte_around_entities() {
        assert_eq!(escape("점<수>"), "점&lt;수&gt;");
    }
}

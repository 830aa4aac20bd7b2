//! Entity escaping for generated markup.

/// Escapes the five reserved markup characters for embedding text into
/// generated SVG content.
///
/// The ampersand is replaced first so the entities produced by the later
/// replacements are not re-escaped. Escaping is single-pass by contract:
/// feeding already-escaped text through again double-escapes the ampersands.
pub fn escape_markup(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five_reserved_characters() {
        assert_eq!(
            escape_markup("&<>\"'"),
            "&amp;&lt;&gt;&quot;&apos;"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_markup("Concept 1"), "Concept 1");
    }

    #[test]
    fn test_ampersand_handled_first() {
        // "&lt;" must not collapse into a single entity
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_double_escaping_is_expected() {
        let once = escape_markup("Fish & Chips");
        let twice = escape_markup(&once);
        assert_eq!(once, "Fish &amp; Chips");
        assert_eq!(twice, "Fish &amp;amp; Chips");
    }

    #[test]
    fn test_script_tag_never_survives() {
        let escaped = escape_markup("<script>alert(1)</script>");
        assert!(!escaped.contains("<script>"));
        assert!(escaped.contains("&lt;script&gt;"));
    }
}

//! Placeholder preview rendering.
//!
//! Builds self-contained SVG data URIs that stand in for generated imagery.
//! Output is deterministic for a given (text, seed) pair and needs no
//! network fetch to display.

use crate::markup::escape_markup;

/// Scheme header every preview payload starts with.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=UTF-8,";

/// Gradient palette pairs (start color, end color), selected by
/// `seed % PALETTES.len()`.
pub const PALETTES: [(&str, &str); 3] = [
    ("#111827", "#db2777"),
    ("#172554", "#06b6d4"),
    ("#3f1d8b", "#f97316"),
];

/// Maximum number of characters of source text rendered into the title.
pub const TITLE_MAX_CHARS: usize = 48;

/// Returns the palette pair for a seed.
pub fn palette_for_seed(seed: usize) -> (&'static str, &'static str) {
    PALETTES[seed % PALETTES.len()]
}

/// Builds a displayable preview image for the given text and seed.
///
/// The layout is fixed: a 960x960 rounded rectangle filled with a diagonal
/// gradient between the seed's palette pair, two semi-transparent circles,
/// and the title text. The title is truncated to [`TITLE_MAX_CHARS`]
/// characters before escaping, so an entity produced by escaping is never
/// cut mid-sequence.
pub fn preview_data_url(text: &str, seed: usize) -> String {
    let (from, to) = palette_for_seed(seed);
    let truncated: String = text.chars().take(TITLE_MAX_CHARS).collect();
    let title = escape_markup(&truncated);

    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='960' height='960'>\
         <defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
         <stop offset='0%' stop-color='{from}'/><stop offset='100%' stop-color='{to}'/>\
         </linearGradient></defs>\
         <rect width='960' height='960' fill='url(#g)' rx='44'/>\
         <circle cx='760' cy='220' r='150' fill='rgba(255,255,255,0.15)'/>\
         <circle cx='230' cy='720' r='220' fill='rgba(255,255,255,0.1)'/>\
         <text x='60' y='820' fill='white' font-size='42' \
         font-family='Arial, sans-serif'>{title}</text>\
         </svg>"
    );

    format!("{DATA_URL_PREFIX}{}", urlencoding::encode(&svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data_url: &str) -> String {
        let payload = data_url.strip_prefix(DATA_URL_PREFIX).unwrap();
        urlencoding::decode(payload).unwrap().into_owned()
    }

    #[test]
    fn test_output_starts_with_scheme_header() {
        let url = preview_data_url("neon city portrait", 0);
        assert!(url.starts_with(DATA_URL_PREFIX));
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        assert_eq!(
            preview_data_url("same text", 2),
            preview_data_url("same text", 2)
        );
    }

    #[test]
    fn test_palette_selection_wraps_by_modulo() {
        assert_eq!(palette_for_seed(0), ("#111827", "#db2777"));
        assert_eq!(palette_for_seed(1), ("#172554", "#06b6d4"));
        assert_eq!(palette_for_seed(2), ("#3f1d8b", "#f97316"));
        assert_eq!(palette_for_seed(3), palette_for_seed(0));
        assert_eq!(
            preview_data_url("wraparound", 3),
            preview_data_url("wraparound", 0)
        );
    }

    #[test]
    fn test_markup_contains_both_palette_colors() {
        let svg = decode(&preview_data_url("gradient check", 1));
        assert!(svg.contains("#172554"));
        assert!(svg.contains("#06b6d4"));
    }

    #[test]
    fn test_title_is_escaped() {
        let svg = decode(&preview_data_url("<script>alert('x')</script>", 0));
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_truncation_happens_before_escaping() {
        // 48 '<' characters escape to 48 entities; a cut entity would show
        // up as a dangling "&lt" fragment instead.
        let input = "<".repeat(48) + "tail";
        let svg = decode(&preview_data_url(&input, 0));
        assert_eq!(svg.matches("&lt;").count(), 48);
        assert!(!svg.contains("tail"));
    }

    #[test]
    fn test_short_text_is_kept_whole() {
        let svg = decode(&preview_data_url("short", 0));
        assert!(svg.contains(">short</text>"));
    }

    #[test]
    fn test_fixed_layout_dimensions() {
        let svg = decode(&preview_data_url("layout", 0));
        assert!(svg.contains("width='960' height='960'"));
        assert!(svg.contains("rx='44'"));
        assert!(svg.contains("cx='760' cy='220' r='150'"));
        assert!(svg.contains("cx='230' cy='720' r='220'"));
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

static DASH_VARIANTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{2010}-\u{2015}]").unwrap());

/// Replace Unicode hyphen/dash code points (U+2010..U+2015) with the ASCII
/// hyphen so the pattern tables match copy-pasted ads. Must run once, before
/// any matching; all byte offsets in hits and spans refer to this buffer.
pub fn normalize_dashes(text: &str) -> String {
    DASH_VARIANTS_RE.replace_all(text, "-").into_owned()
}

/// Snap a byte offset backward to the nearest char boundary.
pub(crate) fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Snap a byte offset forward to the nearest char boundary.
pub(crate) fn ceil_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Slice `text[start..end]` after snapping both offsets to char boundaries.
pub(crate) fn window(text: &str, start: usize, end: usize) -> &str {
    let s = floor_char_boundary(text, start);
    let e = ceil_char_boundary(text, end.min(text.len()));
    &text[s..e]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_variants_become_ascii_hyphen() {
        assert_eq!(
            normalize_dashes("well\u{2010}presented, fast\u{2011}paced \u{2014} apply"),
            "well-presented, fast-paced - apply"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize_dashes("well-presented"), "well-presented");
        assert_eq!(normalize_dashes(""), "");
    }

    #[test]
    fn test_window_snaps_to_char_boundaries() {
        let text = "caf\u{e9} bar";
        // Byte 4 is inside the two-byte 'é'; the slice must not panic.
        assert_eq!(window(text, 4, 9), "\u{e9} bar");
        assert_eq!(window(text, 0, 4), "caf\u{e9}");
    }

    #[test]
    fn test_window_clamps_past_end() {
        assert_eq!(window("abc", 1, 99), "bc");
    }
}

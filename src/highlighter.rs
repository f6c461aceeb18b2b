use serde::Serialize;

use crate::detector::Hit;
use crate::lexicon::Category;

/// Highlight color per category. Kept as a table rather than a method so a
/// missing entry degrades to the neutral fallback instead of failing.
static HIGHLIGHT_COLORS: &[(Category, &str)] = &[
    (Category::Age, "#fde68a"),
    (Category::Language, "#bfdbfe"),
    (Category::CultureFit, "#fecaca"),
    (Category::Gender, "#fbcfe8"),
    (Category::Visa, "#fcd34d"),
    (Category::Appearance, "#fca5a5"),
];

pub const FALLBACK_COLOR: &str = "#e5e7eb";

/// Short "why this was flagged" notes. Not every category has one; absent
/// entries are simply left out of the rationale list.
static CATEGORY_NOTES: &[(Category, &str)] = &[
    (
        Category::Language,
        "ESL = English as a Second Language. Flags wording that excludes non-native speakers.",
    ),
    (
        Category::Age,
        "Wording that implies preference based on age (e.g., 'young', 'recent grad').",
    ),
    (
        Category::CultureFit,
        "Vague 'fit' language that can gatekeep or hide subjective preferences.",
    ),
    (
        Category::Gender,
        "Gendered terms or titles (e.g., 'salesman', 'chairman').",
    ),
];

pub fn highlight_color(category: Category) -> &'static str {
    HIGHLIGHT_COLORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

pub fn category_note(category: Category) -> Option<&'static str> {
    CATEGORY_NOTES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, note)| *note)
}

/// Rationale lines for the given categories, keeping their order and
/// dropping categories without a note.
pub fn notes_for(categories: &[Category]) -> Vec<(Category, &'static str)> {
    categories
        .iter()
        .filter_map(|&c| category_note(c).map(|n| (c, n)))
        .collect()
}

/// A disjoint marked region of the normalized text, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    pub term: String,
}

/// Collect candidate spans from both hit lists. Pattern hits carry their
/// span; phrase hits are anchored at the first case-insensitive occurrence
/// of their term (repeated terms highlight only the first one). Lookups that
/// miss or fall off a char boundary contribute nothing.
pub fn collect_spans(text: &str, lexicon_hits: &[Hit], rule_hits: &[Hit]) -> Vec<HighlightSpan> {
    let low = text.to_lowercase();
    let mut spans = Vec::new();

    for hit in lexicon_hits.iter().chain(rule_hits) {
        let (start, end) = match hit.span() {
            Some(span) => span,
            None => {
                let term = hit.term();
                match low.find(&term.to_lowercase()) {
                    Some(idx) => (idx, idx + term.len()),
                    None => continue,
                }
            }
        };
        if end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        spans.push(HighlightSpan {
            start,
            end,
            category: hit.category(),
            term: text[start..end].to_string(),
        });
    }

    spans
}

/// Resolve overlaps: sort by (start, end), then scan keeping the longer of
/// any two touching spans. The longer-span-wins tie-break decides which
/// category's color shows on ambiguous overlaps and must not change.
pub fn merge_spans(mut spans: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    spans.sort_by_key(|sp| (sp.start, sp.end));
    let mut merged: Vec<HighlightSpan> = Vec::new();
    for sp in spans {
        match merged.last_mut() {
            Some(last) if sp.start <= last.end => {
                if sp.end - sp.start > last.end - last.start {
                    *last = sp;
                }
            }
            _ => merged.push(sp),
        }
    }
    merged
}

/// Escape text for embedding in markup. Attribute quoting is not needed:
/// user text only ever lands in element content.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render `spans` (already merged) over `text` as inline `<mark>` highlights
/// with everything else HTML-escaped. `text` must be the same normalized
/// buffer the spans were computed from.
pub fn render_spans(text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::from("<div style='line-height:1.8'>");
    let mut cursor = 0;
    for sp in spans {
        if cursor < sp.start {
            out.push_str(&escape_html(&text[cursor..sp.start]));
        }
        let color = highlight_color(sp.category);
        out.push_str(&format!(
            "<mark style=\"background:{color}; padding:0 3px; border-radius:3px;\">{}</mark>",
            escape_html(&text[sp.start..sp.end])
        ));
        cursor = sp.end;
    }
    if cursor < text.len() {
        out.push_str(&escape_html(&text[cursor..]));
    }
    out.push_str("</div>");
    out
}

/// Merge and render in one step.
pub fn build_highlighted_html(text: &str, lexicon_hits: &[Hit], rule_hits: &[Hit]) -> String {
    let spans = merge_spans(collect_spans(text, lexicon_hits, rule_hits));
    render_spans(text, &spans)
}

/// Distinct categories across both hit lists, first-seen order. Drives the
/// legend and the rationale list.
pub fn found_categories(lexicon_hits: &[Hit], rule_hits: &[Hit]) -> Vec<Category> {
    let mut found = Vec::new();
    for hit in lexicon_hits.iter().chain(rule_hits) {
        if !found.contains(&hit.category()) {
            found.push(hit.category());
        }
    }
    found
}

/// Colored pill per category for the UI legend.
pub fn render_legend(categories: &[Category]) -> String {
    let mut out = String::from("<div style='margin-top:6px'>");
    for &category in categories {
        let color = highlight_color(category);
        out.push_str(&format!(
            "<span style='display:inline-block; padding:4px 8px; margin:2px; \
             border-radius:999px; background:{color}; font-size:12px'>{}</span>",
            escape_html(category.label())
        ));
    }
    out.push_str("</div>");
    out
}

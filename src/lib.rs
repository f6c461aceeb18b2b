//! Deterministic detection core for the Job-Ad Bias Detector: lexicon and
//! regex-rule matching with negation/whitelist suppression, overlap-resolved
//! highlight spans, and category grouping. The surrounding UI and the
//! generative explanation step consume this crate's output; neither lives
//! here.

mod detector;
mod grouping;
mod highlighter;
mod lexicon;
mod normalize;
#[cfg(feature = "python")]
mod python;
mod rules;
mod suppression;

pub use detector::{
    analyze, find_lexicon_hits, find_rule_hits, run_lexicon, run_rules, Analysis, Hit, PatternHit,
    PhraseHit, CONTEXT_CHARS,
};
pub use grouping::{detection_summary, group_hits, GroupedHits};
pub use highlighter::{
    build_highlighted_html, category_note, collect_spans, found_categories, highlight_color,
    merge_spans, notes_for, render_legend, render_spans, HighlightSpan, FALLBACK_COLOR,
};
pub use lexicon::{Category, LexiconEntry, LEXICON};
pub use normalize::normalize_dashes;
pub use rules::{Rule, RULES};
pub use suppression::{has_eoe_statement, negated_before, role_noun_nearby, SUPPRESSION_WINDOW};

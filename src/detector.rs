use std::collections::BTreeMap;

use serde::Serialize;

use crate::grouping::{self, GroupedHits};
use crate::highlighter::{self, HighlightSpan};
use crate::lexicon::{Category, LexiconEntry, LEXICON};
use crate::normalize::{self, normalize_dashes};
use crate::rules::{Rule, RULES};
use crate::suppression;

/// Bytes of surrounding text attached to lexicon hits.
pub const CONTEXT_CHARS: usize = 30;

/// A lexicon phrase found by case-insensitive search. Carries no span: the
/// highlighter anchors it at the first occurrence of `term`.
#[derive(Debug, Clone, Serialize)]
pub struct PhraseHit {
    pub category: Category,
    pub term: &'static str,
    pub context: String,
    pub rewrite: &'static str,
}

/// A regex match, from either the lexicon's pattern list (context and
/// rewrite attached) or the rule table (span only).
#[derive(Debug, Clone, Serialize)]
pub struct PatternHit {
    pub category: Category,
    pub term: String,
    pub span: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<&'static str>,
}

/// One detected occurrence of potentially biased wording.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Hit {
    Phrase(PhraseHit),
    Pattern(PatternHit),
}

impl Hit {
    pub fn category(&self) -> Category {
        match self {
            Hit::Phrase(h) => h.category,
            Hit::Pattern(h) => h.category,
        }
    }

    pub fn term(&self) -> &str {
        match self {
            Hit::Phrase(h) => h.term,
            Hit::Pattern(h) => &h.term,
        }
    }

    /// Byte span in the normalized text. Phrase hits carry none; their
    /// highlight position is resolved at render time.
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            Hit::Phrase(_) => None,
            Hit::Pattern(h) => Some(h.span),
        }
    }
}

fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    normalize::window(text, start.saturating_sub(width), end + width).to_string()
}

/// Lexicon pass over `text` with a custom table. Each phrase contributes at
/// most one hit (its first occurrence); each pattern contributes one hit per
/// non-overlapping match. Not gated by any suppression filter.
pub fn run_lexicon(text: &str, entries: &[LexiconEntry], context_chars: usize) -> Vec<Hit> {
    let mut hits = Vec::new();
    for entry in entries {
        for (phrase, re) in &entry.phrases {
            if let Some(m) = re.find(text) {
                hits.push(Hit::Phrase(PhraseHit {
                    category: entry.category,
                    term: *phrase,
                    context: context_around(text, m.start(), m.end(), context_chars),
                    rewrite: entry.rewrite,
                }));
            }
        }
        for pattern in &entry.patterns {
            for m in pattern.find_iter(text) {
                hits.push(Hit::Pattern(PatternHit {
                    category: entry.category,
                    term: m.as_str().to_string(),
                    span: (m.start(), m.end()),
                    context: Some(context_around(text, m.start(), m.end(), context_chars)),
                    rewrite: Some(entry.rewrite),
                }));
            }
        }
    }
    hits
}

/// Lexicon pass with the default table and context width.
pub fn find_lexicon_hits(text: &str) -> Vec<Hit> {
    run_lexicon(text, &LEXICON, CONTEXT_CHARS)
}

/// Rule pass over `text` with a custom rule table. Suppressed entirely when
/// the text carries an equal-opportunity statement; individual matches are
/// dropped when negated shortly before, or (for context-required rules) when
/// no role noun appears nearby. Surviving matches accumulate their rule's
/// weight into a per-category score.
pub fn run_rules(text: &str, rules: &[Rule], window: usize) -> (Vec<Hit>, BTreeMap<Category, f64>) {
    let mut hits = Vec::new();
    let mut scores = BTreeMap::new();

    if suppression::has_eoe_statement(text) {
        return (hits, scores);
    }

    for rule in rules {
        for m in rule.pattern.find_iter(text) {
            if suppression::negated_before(text, m.start(), window) {
                continue;
            }
            if rule.needs_context && !suppression::role_noun_nearby(text, m.start(), m.end(), window)
            {
                continue;
            }
            hits.push(Hit::Pattern(PatternHit {
                category: rule.category,
                term: m.as_str().to_string(),
                span: (m.start(), m.end()),
                context: None,
                rewrite: None,
            }));
            *scores.entry(rule.category).or_insert(0.0) += rule.weight;
        }
    }

    (hits, scores)
}

/// Rule pass with the default table and window.
pub fn find_rule_hits(text: &str) -> (Vec<Hit>, BTreeMap<Category, f64>) {
    run_rules(text, &RULES, suppression::SUPPRESSION_WINDOW)
}

/// Full detection report for one analysis call. `text` is the normalized
/// buffer every span refers to.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub text: String,
    pub lexicon_hits: Vec<Hit>,
    pub rule_hits: Vec<Hit>,
    pub scores: BTreeMap<Category, f64>,
    pub spans: Vec<HighlightSpan>,
    pub grouped: GroupedHits,
}

/// Normalize, run both passes, merge highlight spans, group terms by
/// category. Pure and deterministic; identical input yields an identical
/// report.
pub fn analyze(text: &str) -> Analysis {
    let text = normalize_dashes(text);
    let lexicon_hits = find_lexicon_hits(&text);
    let (rule_hits, scores) = find_rule_hits(&text);
    let spans = highlighter::merge_spans(highlighter::collect_spans(
        &text,
        &lexicon_hits,
        &rule_hits,
    ));
    let grouped = grouping::group_hits(&lexicon_hits, &rule_hits);
    Analysis {
        text,
        lexicon_hits,
        rule_hits,
        scores,
        spans,
        grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_hits_are_case_insensitive() {
        for text in ["a Young team", "a YOUNG team", "a young team"] {
            let hits = find_lexicon_hits(text);
            assert!(
                hits.iter()
                    .any(|h| h.category() == Category::Age && h.term() == "young"),
                "no age hit in {text:?}"
            );
        }
    }

    #[test]
    fn test_phrase_hit_carries_context_and_rewrite() {
        let text = "We are seeking a young salesman for the downtown branch.";
        let hits = find_lexicon_hits(text);
        let young = hits
            .iter()
            .find_map(|h| match h {
                Hit::Phrase(p) if p.term == "young" => Some(p),
                _ => None,
            })
            .unwrap();
        assert!(young.context.contains("young salesman"));
        assert!(young.rewrite.contains("skills or years of experience"));
        assert!(young.context.len() <= "young".len() + 2 * CONTEXT_CHARS);
    }

    #[test]
    fn test_lexicon_pattern_emits_one_hit_per_occurrence() {
        let text = "culture fit matters; culture fit is assessed twice";
        let hits = find_lexicon_hits(text);
        let pattern_hits: Vec<_> = hits
            .iter()
            .filter(|h| matches!(h, Hit::Pattern(_)) && h.category() == Category::CultureFit)
            .collect();
        assert_eq!(pattern_hits.len(), 2);
        assert_eq!(pattern_hits[0].span(), Some((0, 11)));
    }

    #[test]
    fn test_rule_hits_carry_exact_spans() {
        let text = "We need a young salesman.";
        let (hits, scores) = find_rule_hits(text);
        let spans: Vec<_> = hits.iter().filter_map(Hit::span).collect();
        assert!(spans.contains(&(10, 15))); // young
        assert!(spans.contains(&(16, 24))); // salesman
        assert_eq!(scores[&Category::Age], 1.0);
        assert_eq!(scores[&Category::Gender], 1.0);
    }

    #[test]
    fn test_negation_suppresses_rule_match() {
        let (hits, scores) = find_rule_hits("Not a young team, we value experience.");
        assert!(hits.is_empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_negation_does_not_gate_lexicon_pass() {
        let hits = find_lexicon_hits("Not a young team, we value experience.");
        assert!(hits.iter().any(|h| h.category() == Category::Age));
    }

    #[test]
    fn test_eoe_statement_short_circuits_rule_pass() {
        let text = "Equal opportunity employer. We want a young candidate.";
        let (hits, scores) = find_rule_hits(text);
        assert!(hits.is_empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_context_required_rule_needs_role_noun() {
        let mut rule = Rule::new(r"\benergetic\b", Category::Age, 1.0);
        rule.needs_context = true;
        let rules = vec![rule];

        let (hits, _) = run_rules("an energetic person wanted", &rules, 40);
        assert_eq!(hits.len(), 1);

        let (hits, scores) = run_rules("an energetic atmosphere", &rules, 40);
        assert!(hits.is_empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_weights_accumulate_per_category() {
        let text = "young, digital native, under 30";
        let (_, scores) = find_rule_hits(text);
        assert_eq!(scores[&Category::Age], 3.0);
    }

    #[test]
    fn test_passes_are_deterministic() {
        let text = "A young salesman, culture fit required, PR only.";
        let a = serde_json::to_string(&analyze(text)).unwrap();
        let b = serde_json::to_string(&analyze(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hit_json_shape_is_tagged() {
        let text = "culture fit";
        let hits = find_lexicon_hits(text);
        let json = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(json["type"], "phrase");
        assert_eq!(json["category"], "cultural fit exclusion");
    }
}

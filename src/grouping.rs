use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::detector::Hit;
use crate::lexicon::Category;

/// Terms grouped by category: first-seen category order, first-seen
/// case-sensitive term dedup. This is the one detection output shared by the
/// legend renderer and the downstream explanation generator, so it is built
/// exactly one way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedHits {
    entries: Vec<(Category, Vec<String>)>,
}

impl GroupedHits {
    fn push(&mut self, category: Category, term: &str) {
        let idx = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(idx) => idx,
            None => {
                self.entries.push((category, Vec::new()));
                self.entries.len() - 1
            }
        };
        let terms = &mut self.entries[idx].1;
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, terms)| (*c, terms.as_slice()))
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, terms)| terms.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for GroupedHits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, terms) in &self.entries {
            map.serialize_entry(category.label(), terms)?;
        }
        map.end()
    }
}

/// Collapse both hit lists into category -> distinct terms, lexicon hits
/// first.
pub fn group_hits(lexicon_hits: &[Hit], rule_hits: &[Hit]) -> GroupedHits {
    let mut grouped = GroupedHits::default();
    for hit in lexicon_hits.iter().chain(rule_hits) {
        grouped.push(hit.category(), hit.term());
    }
    grouped
}

/// Serialize grouped hits as the bullet list handed to the explanation
/// collaborator: one "- category: term, term" line per non-empty category,
/// terms sorted for stable prompts, or the fixed empty-case line.
pub fn detection_summary(grouped: &GroupedHits) -> String {
    let mut lines = Vec::new();
    for (category, terms) in grouped.iter() {
        if terms.is_empty() {
            continue;
        }
        let mut terms: Vec<&str> = terms.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms.dedup();
        lines.push(format!("- {category}: {}", terms.join(", ")));
    }
    if lines.is_empty() {
        return "- None from heuristics/lexicon".to_string();
    }
    lines.join("\n")
}

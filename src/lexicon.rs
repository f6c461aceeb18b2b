use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Bias categories the detector can flag. Defined once at process start;
/// serializes and displays as the UI label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "age bias")]
    Age,
    #[serde(rename = "gender bias")]
    Gender,
    #[serde(rename = "language/ESL bias")]
    Language,
    #[serde(rename = "cultural fit exclusion")]
    CultureFit,
    #[serde(rename = "nationality/visa bias")]
    Visa,
    #[serde(rename = "appearance bias")]
    Appearance,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Age => "age bias",
            Category::Gender => "gender bias",
            Category::Language => "language/ESL bias",
            Category::CultureFit => "cultural fit exclusion",
            Category::Visa => "nationality/visa bias",
            Category::Appearance => "appearance bias",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's worth of the lexicon: exact phrases (compiled to
/// case-insensitive literal regexes so matches carry byte offsets into the
/// normalized buffer), free-form patterns, and a rewrite tip shown next to
/// every hit.
pub struct LexiconEntry {
    pub category: Category,
    pub phrases: Vec<(&'static str, Regex)>,
    pub patterns: Vec<Regex>,
    pub rewrite: &'static str,
}

fn phrase_regex(phrase: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap()
}

fn entry(
    category: Category,
    phrases: &[&'static str],
    patterns: &[&str],
    rewrite: &'static str,
) -> LexiconEntry {
    LexiconEntry {
        category,
        phrases: phrases.iter().map(|p| (*p, phrase_regex(p))).collect(),
        patterns: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
            .collect(),
        rewrite,
    }
}

/// Default lexicon. Intentionally small and transparent: this is the list a
/// reviewer should be able to audit in one sitting.
pub static LEXICON: Lazy<Vec<LexiconEntry>> = Lazy::new(|| {
    vec![
        entry(
            Category::Age,
            &["young", "recent graduate", "new grad", "digital native", "under 30"],
            &[r"\bunder\s*30\b"],
            "Focus on skills or years of experience, not age.",
        ),
        entry(
            Category::Gender,
            &["salesman"],
            &[],
            "Use gender-neutral language such as \u{2018}salesperson\u{2019}.",
        ),
        entry(
            Category::Language,
            &["native English speaker", "no accent"],
            &[r"\bnative\s+english\s+speaker\b", r"\bno\s+accent(s)?\b"],
            "Specify communication skills (e.g., \u{2018}excellent written and spoken English\u{2019}).",
        ),
        entry(
            Category::CultureFit,
            &["culture fit", "work hard play hard"],
            &[r"\bculture\s*fit\b", r"\bwork\s*hard\s*play\s*hard\b"],
            "Describe values and behaviours (e.g., collaboration), not vague \u{2018}fit\u{2019} terms.",
        ),
        entry(
            Category::Visa,
            &["visa sponsorship not available", "PR only"],
            &[r"\bvisa\s*sponsorship\s*not\s*available\b", r"\bPR\s*only\b"],
            "Say \u{2018}must have the legal right to work in X\u{2019} instead of nationality restrictions.",
        ),
        entry(
            Category::Appearance,
            &["well-presented", "well-groomed"],
            &[],
            "Focus on professionalism (e.g., \u{2018}client-facing dress code\u{2019}) rather than appearance.",
        ),
    ]
});

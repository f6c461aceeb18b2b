use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Category;

/// A single quick-highlight detector: one regex, one category, one weight.
/// `needs_context` gates the match on a nearby role noun (see
/// `suppression::role_noun_nearby`); no built-in rule sets it.
pub struct Rule {
    pub pattern: Regex,
    pub category: Category,
    pub weight: f64,
    pub needs_context: bool,
}

impl Rule {
    pub fn new(pattern: &str, category: Category, weight: f64) -> Self {
        Rule {
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            category,
            weight,
            needs_context: false,
        }
    }
}

pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"\byoung\b", Category::Age, 1.0),
        Rule::new(r"\brecent\s*grad(uate)?\b|\bnew\s*grad\b", Category::Age, 1.0),
        Rule::new(r"\bdigital\s*native\b", Category::Age, 1.0),
        Rule::new(r"\bunder\s*30\b", Category::Age, 1.0),
        Rule::new(r"\bsalesman\b", Category::Gender, 1.0),
        Rule::new(r"\bnative\s+english\s+speaker\b", Category::Language, 1.0),
        Rule::new(r"\bno\s+accent(s)?\b", Category::Language, 1.0),
        Rule::new(r"\bculture\s*fit\b", Category::CultureFit, 1.0),
        Rule::new(r"\bwork\s*hard\s*play\s*hard\b", Category::CultureFit, 1.0),
        Rule::new(
            r"\bvisa\s*sponsorship\s*not\s*available\b",
            Category::Visa,
            1.0,
        ),
        Rule::new(r"\bPR\s*only\b", Category::Visa, 1.0),
        Rule::new(
            r"\bwell[-\s]?presented\b|\bwell[-\s]?groomed\b",
            Category::Appearance,
            1.0,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile_and_carry_nonnegative_weights() {
        assert_eq!(RULES.len(), 12);
        for rule in RULES.iter() {
            assert!(rule.weight >= 0.0);
            assert!(!rule.needs_context);
        }
    }

    #[test]
    fn test_rule_patterns_match_case_insensitively() {
        assert!(RULES[0].pattern.is_match("Young professionals"));
        assert!(RULES[10].pattern.is_match("pr only"));
        assert!(RULES[11].pattern.is_match("Well presented and well-groomed"));
    }

    #[test]
    fn test_word_boundaries_hold() {
        // "young" as a whole word only; "youngster" is the lexicon's problem,
        // not a rule hit.
        assert!(!RULES[0].pattern.is_match("youngster"));
    }
}

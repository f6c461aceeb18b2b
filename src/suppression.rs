use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::window;

static NEGATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(no|not|without)\b").unwrap());

static ROLE_NOUNS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(candidate|applicant|hire|person|team|staff|employee)\b").unwrap()
});

static EOE_WHITELIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)equal\s+opportunit(y|ies)|\beoe\b|reasonable\s+accommodation").unwrap()
});

/// Default width of the negation and role-context windows, in bytes.
pub const SUPPRESSION_WINDOW: usize = 40;

/// True when the ad carries an equal-opportunity / accommodation statement.
/// The rule pass treats that as a strong prior against exploitative bias and
/// shuts itself off for the whole call; the lexicon pass is not gated.
pub fn has_eoe_statement(text: &str) -> bool {
    EOE_WHITELIST_RE.is_match(text)
}

/// True when a whole-word "no"/"not"/"without" occurs in the window of
/// `width` bytes immediately before `start`. "not young" is not age bias.
pub fn negated_before(text: &str, start: usize, width: usize) -> bool {
    let pre = window(text, start.saturating_sub(width), start);
    NEGATION_RE.is_match(pre)
}

/// True when a role noun (candidate, applicant, ...) occurs within `width`
/// bytes on either side of the match at `[start, end)`.
pub fn role_noun_nearby(text: &str, start: usize, end: usize, width: usize) -> bool {
    let ctx = window(text, start.saturating_sub(width), end + width);
    ROLE_NOUNS_RE.is_match(ctx)
}

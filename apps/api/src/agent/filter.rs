//! Eligibility Filter — narrows the catalog by income threshold.
//!
//! Eligibility text is a heuristic source, not a structured field: a record
//! whose text yields no number is always kept, never rejected. Only the
//! income answer narrows the set; the remaining answers are context for the
//! Recommendation Composer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::CardRecord;
use crate::models::{AnswerSet, QuestionKey};

/// Upper bound on the candidate subset handed to the composer.
pub const MAX_CANDIDATES: usize = 3;

/// First run of digits, optionally grouped with thousands separators.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid regex"));

/// Extracts the first number from free text, stripping separators.
/// Returns `None` when the text contains no digits.
fn extract_first_number(text: &str) -> Option<u64> {
    let matched = NUMBER_RE.find(text)?;
    matched.as_str().replace(',', "").parse().ok()
}

/// Retains catalog records the user is income-eligible for, in original
/// catalog order, capped at [`MAX_CANDIDATES`].
///
/// The income answer is parsed with the same first-number heuristic as the
/// eligibility text, so "₹50,000 per month" works. An absent or digit-free
/// income answer applies no constraint at all.
pub fn filter_and_rank<'a>(answers: &AnswerSet, catalog: &'a [CardRecord]) -> Vec<&'a CardRecord> {
    let income = answers
        .get(QuestionKey::Income)
        .and_then(extract_first_number);

    catalog
        .iter()
        .filter(|card| match income {
            Some(income) => card
                .eligibility
                .as_deref()
                .and_then(extract_first_number)
                .map_or(true, |min_income| min_income <= income),
            None => true,
        })
        .take(MAX_CANDIDATES)
        .collect()
}

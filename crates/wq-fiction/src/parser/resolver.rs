//! Fuzzy "did you mean" suggestions for mistyped verbs.

use strsim::jaro_winkler;

use super::command::VERB_ALIASES;

/// Minimum similarity score for a verb suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.75;

/// Suggest the known verb alias closest to `input`, if any is close enough.
///
/// Ties go to the alias listed first in the verb table.
pub fn suggest_verb(input: &str) -> Option<&'static str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&'static str, f64)> = None;

    for &(alias, _) in VERB_ALIASES {
        let score = jaro_winkler(&input_lower, alias);
        if score < SUGGEST_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((alias, score));
        }
    }

    best.map(|(alias, _)| alias)
}

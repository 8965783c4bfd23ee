//! Fuzzy matching utilities for place reconciliation.
//!
//! Scores are *distances*: 0.0 is identical, 1.0 is completely dissimilar.

use strsim::normalized_levenshtein;

/// Strings further apart than this are treated as having no reasonable
/// alignment at all.
const MATCH_THRESHOLD: f64 = 0.6;

/// Normalized fuzzy distance between two strings in `[0, 1]`, lower meaning
/// more similar.
///
/// Returns `None` when no reasonable alignment exists: either side is blank
/// after trimming, or the strings are further apart than the match threshold.
/// Callers decide what an undefined match costs them.
pub fn distance(a: &str, b: &str) -> Option<f64> {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let dist = 1.0 - normalized_levenshtein(&a, &b);
    if dist > MATCH_THRESHOLD {
        None
    } else {
        Some(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(distance("Joe's Pizza", "Joe's Pizza"), Some(0.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(distance("JOE'S PIZZA", "joe's pizza"), Some(0.0));
    }

    #[test]
    fn test_close_strings_score_low() {
        let d = distance("Joes Pizza", "Joe's Pizza").expect("should align");
        assert!(d > 0.0 && d < 0.2, "distance was {d}");
    }

    #[test]
    fn test_street_abbreviation() {
        let d = distance("123 Main St", "123 Main Street").expect("should align");
        assert!(d < 0.4, "distance was {d}");
    }

    #[test]
    fn test_unrelated_strings_have_no_alignment() {
        assert_eq!(distance("Unrelated Deli", "Joe's Pizza"), None);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(distance("", "Joe's Pizza"), None);
        assert_eq!(distance("Joe's Pizza", "   "), None);
    }
}

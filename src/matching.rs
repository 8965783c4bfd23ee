//! Place reconciliation.
//!
//! Different review sites describe the same restaurant with different names,
//! punctuation and address formats, so after searching a provider we have to
//! decide which of its results is the place the user is actually looking at.
//!
//! Algorithm, in priority order:
//! 1. Return the first candidate with a matching phone number suffix.
//! 2. Disregard candidates with a conflicting postal code.
//! 3. Return the best remaining candidate by fuzzy name/address distance.

use crate::place::Place;
use crate::utils::{fuzzy, phone};
use tracing::debug;

/// How much more an address mismatch costs than a name mismatch. Street lines
/// are less prone to stylistic variation than business names.
const ADDRESS_WEIGHT: f64 = 2.0;

/// Pick the candidate that best matches `reference`, or `None` when nothing
/// survives filtering.
///
/// Candidates are treated as a search-ranked list: input order breaks ties
/// and decides among equal phone suffixes. The function never fails; absent
/// optional fields degrade (no phone skips phone matching, a missing postal
/// code matches any postal code, a missing name or street line scores as a
/// complete mismatch).
///
/// Note the postal filter is strict: if every candidate carries a postal code
/// conflicting with the reference's the result is `None`, even when a
/// perfectly named candidate exists among them.
pub fn best_match<'a>(reference: &Place, candidates: &'a [Place]) -> Option<&'a Place> {
    debug!("Matching {} candidates against '{}'", candidates.len(), reference.name);
    if candidates.is_empty() {
        return None;
    }

    // Phone matching, disregarding the area code
    if let Some(ref_digits) = phone::raw_phone_number(reference.phone.as_deref()) {
        let ref_suffix = phone::suffix(&ref_digits, phone::SUFFIX_LEN);
        if let Some(hit) = candidates.iter().find(|c| {
            phone::raw_phone_number(c.phone.as_deref())
                .is_some_and(|d| phone::suffix(&d, phone::SUFFIX_LEN) == ref_suffix)
        }) {
            debug!("Phone suffix match: '{}'", hit.name);
            return Some(hit);
        }
    }

    // Disregard conflicting postal codes, then take the best fuzzy match.
    // Vec::sort_by is stable, so equal scores keep their search ranking.
    let mut survivors: Vec<&Place> = candidates
        .iter()
        .filter(|c| match (&c.postal_code, &reference.postal_code) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        })
        .collect();
    survivors.sort_by(|a, b| {
        matching_score(reference, a)
            .partial_cmp(&matching_score(reference, b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    survivors.first().copied()
}

/// Combined fuzzy distance between the reference and one candidate. Lower is
/// better; a term with no reasonable alignment costs the full 1.0.
fn matching_score(reference: &Place, candidate: &Place) -> f64 {
    let name_dist = fuzzy::distance(&candidate.name, &reference.name).unwrap_or(1.0);
    let addr_dist = match (candidate.street_line(), reference.street_line()) {
        (Some(a), Some(b)) => fuzzy::distance(a, b).unwrap_or(1.0),
        _ => 1.0,
    };
    name_dist + addr_dist * ADDRESS_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, street: &str, phone: Option<&str>, postal: Option<&str>) -> Place {
        Place {
            name: name.to_string(),
            formatted_address: if street.is_empty() {
                vec![]
            } else {
                vec![street.to_string()]
            },
            phone: phone.map(str::to_string),
            postal_code: postal.map(str::to_string),
            ..Place::default()
        }
    }

    #[test]
    fn test_empty_candidates() {
        let reference = place("Joe's Pizza", "123 Main St", None, None);
        assert_eq!(best_match(&reference, &[]), None);
    }

    #[test]
    fn test_phone_suffix_wins_over_everything() {
        let reference = place(
            "Joe's Pizza",
            "123 Main St",
            Some("(212) 555-1234"),
            Some("10012"),
        );
        let candidates = vec![
            // Better name/address, same postal code, wrong phone
            place("Joes Pizza", "123 Main Street", Some("9998887777"), Some("10012")),
            // Terrible name, but the phone suffix matches
            place("Unrelated Deli", "900 Far Ave", Some("2125551234"), Some("10012")),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[1]));
    }

    #[test]
    fn test_formatted_phone_matches_bare_digits() {
        let reference = place(
            "Joe's Pizza",
            "123 Main St",
            Some("(212) 555-1234"),
            Some("10012"),
        );
        let candidates = vec![
            place("Joes Pizza", "123 Main Street", Some("2125551234"), Some("10012")),
            place("Unrelated Deli", "", Some("9998887777"), Some("10012")),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));
    }

    #[test]
    fn test_phone_match_ignores_area_code() {
        let reference = place("Joe's Pizza", "123 Main St", Some("+1 646 555 1234"), None);
        let candidates = vec![place("Joe's", "123 Main St", Some("(212) 555-1234"), None)];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));
    }

    #[test]
    fn test_first_phone_match_wins() {
        let reference = place("Joe's Pizza", "123 Main St", Some("5551234"), None);
        let candidates = vec![
            place("First", "1 A St", Some("212 555 1234"), None),
            place("Second", "2 B St", Some("646 555 1234"), None),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));
    }

    #[test]
    fn test_digitless_phone_disables_phone_matching() {
        // The phone-matchable candidate would win on phones, but the
        // reference phone has no digits so step 1 never runs and the
        // fuzzy match picks the similarly named candidate instead.
        let reference = place("Joe's Pizza", "123 Main St", Some("call us!"), None);
        let candidates = vec![
            place("Unrelated Deli", "900 Far Ave", Some("call us!"), None),
            place("Joes Pizza", "123 Main Street", Some("2125551234"), None),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[1]));
    }

    #[test]
    fn test_absent_phone_skips_to_fuzzy() {
        let reference = place("Joe's Pizza", "123 Main St", None, None);
        let candidates = vec![
            place("Totally Different", "55 Elsewhere Blvd", Some("2125551234"), None),
            place("Joes Pizza", "123 Main Street", None, None),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[1]));
    }

    #[test]
    fn test_conflicting_postal_code_never_returned() {
        let reference = place("Joe's Pizza", "123 Main St", None, Some("94107"));
        let candidates = vec![
            place("Joe's Pizza", "123 Main St", None, Some("10012")),
            place("Some Other Spot", "77 Side St", None, Some("94107")),
        ];
        // The exact-name candidate is in the wrong postal code and must lose.
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[1]));
    }

    #[test]
    fn test_missing_postal_code_is_wildcard() {
        let reference = place("Joe's Pizza", "123 Main St", None, Some("94107"));
        let candidates = vec![place("Joes Pizza", "123 Main Street", None, None)];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));

        let reference = place("Joe's Pizza", "123 Main St", None, None);
        let candidates = vec![place("Joes Pizza", "123 Main Street", None, Some("10012"))];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));
    }

    // Documented boundary case: the postal filter is strict enough to throw
    // away a clearly correct name/address match.
    #[test]
    fn test_conflicting_postal_codes_eliminate_everything() {
        let reference = place("Joe's Pizza", "123 Main St", None, Some("94107"));
        let candidates = vec![
            place("Joe's Pizza", "123 Main St", None, Some("10012")),
            place("Joes Pizza", "123 Main Street", None, Some("10013")),
        ];
        assert_eq!(best_match(&reference, &candidates), None);
    }

    #[test]
    fn test_tie_break_keeps_input_order() {
        let reference = place("Joe's Pizza", "123 Main St", None, None);
        let candidates = vec![
            place("Joe's Pizza", "123 Main St", None, None),
            place("Joe's Pizza", "123 Main St", None, None),
        ];
        let winner = best_match(&reference, &candidates).expect("match expected");
        assert!(std::ptr::eq(winner, &candidates[0]));
    }

    #[test]
    fn test_all_optional_fields_absent() {
        let reference = place("Joe's Pizza", "123 Main St", None, None);
        let candidates = vec![place("", "", None, None)];
        // Nothing to score on, but a candidate still comes back.
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[0]));
    }

    #[test]
    fn test_address_weighs_double() {
        let reference = place("Joe's Pizza", "123 Main St", None, None);
        let candidates = vec![
            // Exact name, no address alignment: 0.0 + 2.0
            place("Joe's Pizza", "99999 Nowhere Roadway", None, None),
            // No name alignment, exact address: 1.0 + 0.0
            place("Unrelated Deli", "123 Main St", None, None),
        ];
        assert_eq!(best_match(&reference, &candidates), Some(&candidates[1]));
    }
}

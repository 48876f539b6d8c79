//! Free-text search across every field of a record.
//!
//! Search is a linear scan: each record's fields are stringified and checked
//! for a case-insensitive substring match. No index is built, which keeps the
//! engine simple for collections up to roughly ten thousand records. Larger
//! tables need an inverted index and are outside what this module handles.

use crate::record::Record;

/// Returns `true` if any field of `record` contains `term`, ignoring case.
///
/// An empty term matches every record. All fields are scanned, including ones
/// the schema does not declare.
///
/// ```
/// use gridview::search_matches;
/// use serde_json::json;
///
/// let row = json!({"name": "Ada Lovelace", "year": 1815});
/// assert!(search_matches(&row, "LOVE"));
/// assert!(search_matches(&row, "181"));
/// assert!(!search_matches(&row, "zzz"));
/// assert!(search_matches(&row, ""));
/// ```
pub fn search_matches<R: Record + ?Sized>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .field_keys()
        .into_iter()
        .any(|key| record.field(key).to_text().to_lowercase().contains(&needle))
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_term_matches_everything() {
        assert!(search_matches(&json!({}), ""));
        assert!(search_matches(&json!({"a": null}), ""));
    }

    #[test]
    fn scans_every_field() {
        let row = json!({"name": "Widget", "sku": "WX-100", "notes": "fragile"});
        assert!(search_matches(&row, "wx-1"));
        assert!(search_matches(&row, "FRAG"));
        assert!(!search_matches(&row, "gadget"));
    }

    #[test]
    fn matches_stringified_scalars() {
        let row = json!({"qty": 42, "active": true, "price": 2.0});
        assert!(search_matches(&row, "42"));
        assert!(search_matches(&row, "TRUE"));
        assert!(search_matches(&row, "2"));
        assert!(!search_matches(&row, "2.0"));
    }

    #[test]
    fn null_and_nested_fields_never_match() {
        let row = json!({"notes": null, "tags": ["alpha"]});
        assert!(!search_matches(&row, "null"));
        assert!(!search_matches(&row, "alpha"));
    }

    #[test]
    fn case_folding_helper() {
        assert!(contains_ignore_case("Hello World", "WORLD"));
        assert!(contains_ignore_case("x", ""));
        assert!(!contains_ignore_case("Hello", "help"));
    }
}

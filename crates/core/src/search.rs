//! Case-insensitive substring search over catalog records.
//!
//! Lives in `core` so the store, the HTTP layer and the client all agree on
//! which fields a search term is matched against.

/// A record that can be filtered by a free-text search term.
pub trait Searchable {
    /// Text fields the search term is matched against.
    ///
    /// Absent fields are simply skipped; they never match.
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Normalize a raw search parameter.
///
/// Returns `None` for an absent or empty term, meaning "no filter". The term
/// is lowercased but otherwise kept as typed (inner and surrounding
/// whitespace included).
///
/// # Examples
///
/// ```
/// use cinecat_core::search::normalize_term;
/// assert_eq!(normalize_term(Some("Nolan")), Some("nolan".to_string()));
/// assert_eq!(normalize_term(Some("")), None);
/// assert_eq!(normalize_term(None), None);
/// ```
pub fn normalize_term(term: Option<&str>) -> Option<String> {
    match term {
        Some(t) if !t.is_empty() => Some(t.to_lowercase()),
        _ => None,
    }
}

/// Whether `record` passes the (already normalized) search term.
///
/// A `None` term passes everything.
pub fn matches<T: Searchable + ?Sized>(record: &T, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };

    record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        name: Option<String>,
        tag: Option<String>,
    }

    impl Searchable for Named {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![self.name.as_deref(), self.tag.as_deref()]
        }
    }

    fn named(name: &str, tag: Option<&str>) -> Named {
        Named {
            name: Some(name.to_string()),
            tag: tag.map(str::to_string),
        }
    }

    #[test]
    fn no_term_matches_everything() {
        assert!(matches(&named("Inception", None), None));
    }

    #[test]
    fn match_is_case_insensitive() {
        let term = normalize_term(Some("INCEP"));
        assert!(matches(&named("Inception", None), term.as_deref()));
    }

    #[test]
    fn any_field_can_match() {
        let term = normalize_term(Some("crime"));
        assert!(matches(&named("Goodfellas", Some("Crimen")), term.as_deref()));
    }

    #[test]
    fn absent_fields_never_match() {
        let record = Named {
            name: None,
            tag: None,
        };
        let term = normalize_term(Some("a"));
        assert!(!matches(&record, term.as_deref()));
    }

    #[test]
    fn non_ascii_terms_are_folded() {
        let term = normalize_term(Some("ALMODÓVAR"));
        assert!(matches(&named("Pedro Almodóvar", None), term.as_deref()));
    }

    #[test]
    fn empty_term_normalizes_to_none() {
        assert_eq!(normalize_term(Some("")), None);
    }
}

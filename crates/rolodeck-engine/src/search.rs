//! The live search filter over profile names.

/// True when `query` (lowercased) is a substring of the full name with
/// or without the separating space. "nedoe", "jane doe" and "janedoe"
/// all match "Jane Doe"; the empty query matches everyone.
pub fn name_matches(first: &str, last: &str, query: &str) -> bool {
    let query = query.to_lowercase();
    format!("{}{}", first, last).to_lowercase().contains(&query)
        || format!("{} {}", first, last).to_lowercase().contains(&query)
}

/// The single piece of mutable filter state for the session. Updated on
/// every keystroke; consulted by the card grid on each filter
/// application and by overlay navigation on each show.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    text: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn matches(&self, first: &str, last: &str) -> bool {
        name_matches(first, last, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everyone() {
        assert!(name_matches("Jane", "Doe", ""));
        assert!(name_matches("", "", ""));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(name_matches("Jane", "Doe", "JANE"));
        assert!(name_matches("Jane", "Doe", "doe"));
    }

    #[test]
    fn query_may_span_the_name_boundary() {
        assert!(name_matches("Jane", "Doe", "nedoe"));
        assert!(name_matches("Jane", "Doe", "jane doe"));
        assert!(name_matches("Jane", "Doe", "janedoe"));
        assert!(name_matches("Jane", "Doe", "ne do"));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!name_matches("Jane", "Doe", "smith"));
        assert!(!name_matches("Jane", "Doe", "jane  doe"));
    }

    #[test]
    fn filter_holds_and_applies_its_text() {
        let mut filter = SearchFilter::new();
        assert!(filter.matches("Jane", "Doe"));

        filter.set_text("smith");
        assert_eq!(filter.text(), "smith");
        assert!(!filter.matches("Jane", "Doe"));
        assert!(filter.matches("Alice", "Smith"));
    }
}

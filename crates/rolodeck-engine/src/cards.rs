//! The card grid registry: one summary card per profile, with the
//! visibility flags the search filter drives.

use rolodeck_types::Profile;

/// Display fields for one summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    pub title: String,
    pub email: String,
    pub locality: String,
    pub thumbnail_url: String,
}

/// One card per profile, same ordinal index. Carries the name fields
/// the filter predicate needs so filtering never reaches back into the
/// store.
#[derive(Debug, Clone)]
pub struct CardEntry {
    pub index: usize,
    pub first_name: String,
    pub last_name: String,
    pub card: GalleryCard,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct CardRegistry {
    entries: Vec<CardEntry>,
}

impl CardRegistry {
    /// One card per profile, in store order, all visible (the empty
    /// filter matches everyone).
    pub fn build(profiles: &[Profile]) -> Self {
        let entries = profiles
            .iter()
            .map(|profile| CardEntry {
                index: profile.index,
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                card: GalleryCard {
                    title: profile.full_name(),
                    email: profile.email.clone(),
                    locality: format!("{}, {}", profile.city, profile.state),
                    thumbnail_url: profile.thumbnail_url.clone(),
                },
                visible: true,
            })
            .collect();
        Self { entries }
    }

    /// Recompute every entry's visibility from the predicate. Side
    /// effect only, and idempotent: the same predicate always produces
    /// the same visible set.
    pub fn apply_filter(&mut self, predicate: impl Fn(&str, &str) -> bool) {
        for entry in &mut self.entries {
            entry.visible = predicate(&entry.first_name, &entry.last_name);
        }
    }

    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CardEntry> {
        self.entries.get(index)
    }

    /// Ordinal indices of the currently visible cards, in grid order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.index)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.visible).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::name_matches;
    use crate::test_support::profiles;

    fn registry() -> CardRegistry {
        CardRegistry::build(&profiles(&[
            ("Alice", "Smith"),
            ("Bob", "Jones"),
            ("Cara", "Smith"),
        ]))
    }

    #[test]
    fn builds_one_card_per_profile_in_order() {
        let cards = registry();
        assert_eq!(cards.len(), 3);
        for (i, entry) in cards.entries().iter().enumerate() {
            assert_eq!(entry.index, i);
            assert!(entry.visible);
        }
        assert_eq!(cards.get(0).unwrap().card.title, "Alice Smith");
        assert_eq!(cards.get(1).unwrap().card.locality, "Springfield, Illinois");
    }

    #[test]
    fn builds_nothing_from_no_profiles() {
        let cards = CardRegistry::build(&[]);
        assert!(cards.is_empty());
        assert_eq!(cards.visible_count(), 0);
    }

    #[test]
    fn filter_hides_non_matching_cards() {
        let mut cards = registry();
        cards.apply_filter(|first, last| name_matches(first, last, "smith"));

        assert_eq!(cards.visible_indices(), vec![0, 2]);
        assert!(!cards.get(1).unwrap().visible);
    }

    #[test]
    fn empty_filter_shows_everyone() {
        let mut cards = registry();
        cards.apply_filter(|first, last| name_matches(first, last, "smith"));
        cards.apply_filter(|first, last| name_matches(first, last, ""));

        assert_eq!(cards.visible_count(), 3);
    }

    #[test]
    fn applying_the_same_filter_twice_is_idempotent() {
        let mut cards = registry();
        cards.apply_filter(|first, last| name_matches(first, last, "jones"));
        let first_pass = cards.visible_indices();
        cards.apply_filter(|first, last| name_matches(first, last, "jones"));

        assert_eq!(cards.visible_indices(), first_pass);
        assert_eq!(first_pass, vec![1]);
    }
}

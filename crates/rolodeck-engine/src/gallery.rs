//! Gallery orchestration: owns the store, both registries, and the
//! filter, and exposes the handful of operations the UI wires events
//! to. Built once from fetched records; a failed fetch simply means an
//! empty record list.

use rolodeck_types::RawUser;

use crate::cards::CardRegistry;
use crate::overlay::{NavDirection, OverlayRegistry};
use crate::search::SearchFilter;
use crate::store::ProfileStore;

pub struct Gallery {
    store: ProfileStore,
    cards: CardRegistry,
    overlays: OverlayRegistry,
    filter: SearchFilter,
}

impl Gallery {
    /// Populate the store, then the card and overlay registries, in
    /// that order. Zero records produce a working, empty gallery.
    pub fn from_records(records: Vec<RawUser>) -> Self {
        let store = ProfileStore::load(records);
        let cards = CardRegistry::build(store.profiles());
        let overlays = OverlayRegistry::build(store.profiles());
        Self {
            store,
            cards,
            overlays,
            filter: SearchFilter::new(),
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Update the filter and immediately reapply it to the card grid.
    /// No debouncing: every keystroke re-evaluates all entries. If an
    /// overlay is up, its nav controls are refreshed against the new
    /// filter as well.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter.set_text(text);

        let Self { cards, filter, .. } = self;
        cards.apply_filter(|first, last| filter.matches(first, last));

        if let Some(index) = self.overlays.attached() {
            self.overlays.show(index, &self.filter);
        }
    }

    pub fn show_overlay(&mut self, index: usize) {
        self.overlays.show(index, &self.filter);
    }

    pub fn close_overlay(&mut self) {
        if let Some(index) = self.overlays.attached() {
            self.overlays.close(index);
        }
    }

    /// Activate the attached overlay's prev/next control.
    pub fn step_overlay(&mut self, direction: NavDirection) -> Option<usize> {
        self.overlays.step(direction, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::raw_user;

    fn gallery() -> Gallery {
        Gallery::from_records(vec![
            raw_user("Alice", "Smith"),
            raw_user("Bob", "Jones"),
            raw_user("Cara", "Smith"),
        ])
    }

    #[test]
    fn registries_are_parallel_to_the_store() {
        let gallery = gallery();
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.cards().len(), 3);
        assert_eq!(gallery.overlays().len(), 3);
        for i in 0..3 {
            assert_eq!(gallery.store().get(i).unwrap().index, i);
            assert_eq!(gallery.cards().get(i).unwrap().index, i);
            assert_eq!(gallery.overlays().get(i).unwrap().index, i);
        }
    }

    #[test]
    fn empty_records_build_an_empty_gallery() {
        let mut gallery = Gallery::from_records(Vec::new());
        assert!(gallery.is_empty());

        // Every operation stays inert rather than erroring.
        gallery.set_filter_text("smith");
        gallery.show_overlay(0);
        assert_eq!(gallery.overlays().attached(), None);
        assert_eq!(gallery.step_overlay(NavDirection::Next), None);
    }

    #[test]
    fn filter_text_drives_card_visibility() {
        let mut gallery = gallery();
        gallery.set_filter_text("smith");
        assert_eq!(gallery.cards().visible_indices(), vec![0, 2]);

        gallery.set_filter_text("");
        assert_eq!(gallery.cards().visible_count(), 3);
    }

    #[test]
    fn filter_change_refreshes_open_overlay_controls() {
        let mut gallery = gallery();
        gallery.show_overlay(0);
        assert_eq!(gallery.overlays().nav().unwrap().next, Some(1));

        gallery.set_filter_text("smith");
        assert_eq!(gallery.overlays().attached(), Some(0));
        assert_eq!(gallery.overlays().nav().unwrap().next, Some(2));
    }
}

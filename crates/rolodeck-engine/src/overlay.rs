//! The detail-overlay registry: one full-detail panel per profile, at
//! most one attached at a time, with prev/next navigation that skips
//! profiles hidden by the active search filter.

use rolodeck_types::Profile;

use crate::format;
use crate::search::SearchFilter;

/// Whether an overlay is currently part of the visible screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
    Detached,
    Attached,
}

/// Display fields for one detail panel, formatted once at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPanel {
    pub picture_url: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
}

/// One overlay per profile, same ordinal index. The name fields are
/// kept here so navigation can evaluate the filter predicate without
/// reaching back into the store.
#[derive(Debug, Clone)]
pub struct OverlayEntry {
    pub index: usize,
    pub first_name: String,
    pub last_name: String,
    pub panel: OverlayPanel,
    state: AttachState,
}

impl OverlayEntry {
    pub fn state(&self) -> AttachState {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Navigation controls for the attached overlay, rebuilt fresh on every
/// show because the filter may have changed since the last one. A
/// `None` slot is a control that renders inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

#[derive(Debug, Default)]
pub struct OverlayRegistry {
    entries: Vec<OverlayEntry>,
    attached: Option<usize>,
    nav: Option<NavControls>,
}

impl OverlayRegistry {
    /// One detail overlay per profile, in store order, all detached.
    pub fn build(profiles: &[Profile]) -> Self {
        let entries = profiles
            .iter()
            .map(|profile| OverlayEntry {
                index: profile.index,
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                panel: OverlayPanel {
                    picture_url: profile.picture_url.clone(),
                    name: profile.full_name(),
                    email: profile.email.clone(),
                    city: profile.city.clone(),
                    phone: format::phone(&profile.cell),
                    address: format::street_address(profile),
                    birthday: format::birth_date(&profile.birth_date),
                },
                state: AttachState::Detached,
            })
            .collect();
        Self {
            entries,
            attached: None,
            nav: None,
        }
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&OverlayEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the attached overlay, if any. At most one entry is ever
    /// attached.
    pub fn attached(&self) -> Option<usize> {
        self.attached
    }

    /// Controls for the attached overlay. `None` when nothing is shown.
    pub fn nav(&self) -> Option<NavControls> {
        self.nav
    }

    /// Attach the overlay at `index`, detaching whichever one is
    /// currently up. Re-showing the attached index keeps the attachment
    /// but still rebuilds the nav controls against the current filter.
    /// An out-of-range index is ignored.
    pub fn show(&mut self, index: usize, filter: &SearchFilter) {
        if index >= self.entries.len() {
            return;
        }

        if self.attached != Some(index) {
            if let Some(current) = self.attached.take() {
                self.nav = None;
                self.entries[current].state = AttachState::Detached;
            }
            self.entries[index].state = AttachState::Attached;
            self.attached = Some(index);
        }

        self.nav = Some(NavControls {
            prev: self.navigate(NavDirection::Prev, index, filter),
            next: self.navigate(NavDirection::Next, index, filter),
        });
    }

    /// Detach the overlay at `index`. The nav controls are dropped
    /// before the overlay itself so a re-show always starts from a
    /// clean slate. Closing an overlay that is not attached is a no-op.
    pub fn close(&mut self, index: usize) {
        if self.attached == Some(index) {
            self.nav = None;
            self.entries[index].state = AttachState::Detached;
            self.attached = None;
        }
    }

    /// First index strictly before/after `from` whose profile names
    /// satisfy the current filter, or `None` at the boundary. The scan
    /// is linear and evaluated fresh on every call; `from` itself is
    /// never considered, and it need not match the filter.
    pub fn navigate(
        &self,
        direction: NavDirection,
        from: usize,
        filter: &SearchFilter,
    ) -> Option<usize> {
        let candidates: Box<dyn Iterator<Item = &OverlayEntry>> = match direction {
            NavDirection::Next => Box::new(self.entries.iter().skip(from + 1)),
            NavDirection::Prev => Box::new(self.entries.iter().take(from).rev()),
        };

        for entry in candidates {
            if filter.matches(&entry.first_name, &entry.last_name) {
                return Some(entry.index);
            }
        }
        None
    }

    /// Activate the attached overlay's prev/next control: close the
    /// current entry, then show the target. The scan runs fresh on
    /// every activation rather than trusting the controls built at
    /// show time. Returns the target index, or `None` when the
    /// direction is inert (or nothing is attached).
    pub fn step(&mut self, direction: NavDirection, filter: &SearchFilter) -> Option<usize> {
        let current = self.attached?;
        let target = self.navigate(direction, current, filter)?;

        self.close(current);
        self.show(target, filter);
        Some(target)
    }
}

// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_time::EventId;
use hashbrown::HashSet;

use crate::EventHierarchy;

/// The set of parents whose subtrees are hidden.
///
/// Ids that are not parents (or no longer exist) may sit in the set
/// harmlessly; [`EventHierarchy::rows`] only consults it for events that have
/// children. Use [`Self::retain_parents`] to drop them after the event set
/// changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapsedParents {
    ids: HashSet<EventId>,
}

impl CollapsedParents {
    /// Creates an empty set (everything expanded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id`'s subtree is hidden.
    #[must_use]
    pub fn is_collapsed(&self, id: EventId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips `id` and returns whether it is now collapsed.
    ///
    /// Toggling the same id twice restores the original set.
    pub fn toggle(&mut self, id: EventId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Hides `id`'s subtree. Returns `false` if it was already hidden.
    pub fn collapse(&mut self, id: EventId) -> bool {
        self.ids.insert(id)
    }

    /// Shows `id`'s subtree. Returns `false` if it was already shown.
    pub fn expand(&mut self, id: EventId) -> bool {
        self.ids.remove(&id)
    }

    /// Collapses every parent in `hierarchy`.
    pub fn collapse_all(&mut self, hierarchy: &EventHierarchy) {
        self.ids.extend(hierarchy.parents());
    }

    /// Expands everything.
    pub fn expand_all(&mut self) {
        self.ids.clear();
    }

    /// Forgets ids that are not parents in `hierarchy`.
    pub fn retain_parents(&mut self, hierarchy: &EventHierarchy) {
        self.ids.retain(|id| hierarchy.has_children(*id));
    }

    /// Number of collapsed ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the collapsed ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoscope_time::Event;

    #[test]
    fn toggle_is_an_involution() {
        let mut set = CollapsedParents::new();
        assert!(set.toggle(EventId(7)));
        assert!(set.is_collapsed(EventId(7)));
        assert!(!set.toggle(EventId(7)));
        assert_eq!(set, CollapsedParents::new());
    }

    #[test]
    fn collapse_and_expand_report_changes() {
        let mut set = CollapsedParents::new();
        assert!(set.collapse(EventId(1)));
        assert!(!set.collapse(EventId(1)));
        assert!(set.expand(EventId(1)));
        assert!(!set.expand(EventId(1)));
    }

    #[test]
    fn collapse_all_then_expand_all() {
        let events = [
            Event::new(1, "p").at(0),
            Event::new(2, "c").at(1).with_parent(1),
            Event::new(3, "leaf").at(2),
        ];
        let h = EventHierarchy::new(&events);
        let mut set = CollapsedParents::new();
        set.collapse_all(&h);
        assert_eq!(set.len(), 1);
        assert!(set.is_collapsed(EventId(1)));
        assert_eq!(h.rows(&set).len(), 2);

        set.expand_all();
        assert!(set.is_empty());
        assert_eq!(h.rows(&set).len(), 3);
    }

    #[test]
    fn retain_parents_drops_stale_ids() {
        let events = [Event::new(1, "p").at(0), Event::new(2, "c").with_parent(1)];
        let h = EventHierarchy::new(&events);
        let mut set = CollapsedParents::new();
        set.collapse(EventId(1));
        set.collapse(EventId(2));
        set.collapse(EventId(42));
        set.retain_parents(&h);
        assert_eq!(set.iter().collect::<Vec<_>>(), [EventId(1)]);
    }
}

// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_time::{Event, EventId};
use hashbrown::HashMap;

use crate::CollapsedParents;

/// One visible row of the timeline, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    /// Index of the event in the slice the hierarchy was built from.
    pub index: usize,
    /// Id of the event.
    pub id: EventId,
    /// Nesting depth; roots are `0`.
    pub depth: usize,
    /// Whether the event has any children.
    pub has_children: bool,
    /// Whether the event's children are hidden.
    pub collapsed: bool,
}

/// Parent/child grouping of an event set.
///
/// Built once per event set and addressed by index into that set. Each
/// parent's children are ordered by `(time_start or 0, display_order)`, ties
/// keeping input order.
///
/// A `parent_event_id` that names no event in the set (or the event itself)
/// is treated as absent, so the event becomes a root.
#[derive(Clone, Debug, Default)]
pub struct EventHierarchy {
    ids: Vec<EventId>,
    index: HashMap<EventId, usize>,
    children: HashMap<Option<EventId>, Vec<usize>>,
}

impl EventHierarchy {
    /// Groups `events` by parent.
    #[must_use]
    pub fn new(events: &[Event]) -> Self {
        let ids: Vec<EventId> = events.iter().map(|e| e.id).collect();

        let mut index = HashMap::with_capacity(events.len());
        for (i, id) in ids.iter().enumerate() {
            // Duplicate ids resolve to the first occurrence.
            index.entry(*id).or_insert(i);
        }

        let mut children: HashMap<Option<EventId>, Vec<usize>> = HashMap::new();
        for (i, event) in events.iter().enumerate() {
            let parent = event
                .parent_event_id
                .filter(|p| *p != event.id && index.contains_key(p));
            children.entry(parent).or_default().push(i);
        }
        for bucket in children.values_mut() {
            bucket.sort_by_key(|&i| events[i].sort_key());
        }

        Self {
            ids,
            index,
            children,
        }
    }

    /// Number of events in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of the event with `id`.
    #[must_use]
    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Ordered direct children of `parent` (`None` for roots).
    #[must_use]
    pub fn children(&self, parent: Option<EventId>) -> &[usize] {
        self.children.get(&parent).map_or(&[], Vec::as_slice)
    }

    /// Ordered root events.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        self.children(None)
    }

    /// Returns `true` if `id` has at least one child.
    #[must_use]
    pub fn has_children(&self, id: EventId) -> bool {
        !self.children(Some(id)).is_empty()
    }

    /// Ids of every event that has children.
    pub fn parents(&self) -> impl Iterator<Item = EventId> + '_ {
        self.children
            .iter()
            .filter(|(_, kids)| !kids.is_empty())
            .filter_map(|(parent, _)| *parent)
    }

    /// Indices of every descendant of `id`, in display order.
    #[must_use]
    pub fn descendants(&self, id: EventId) -> Vec<usize> {
        let mut out = Vec::new();
        let mut seen = vec![false; self.len()];
        let mut stack: Vec<usize> = self.children(Some(id)).iter().rev().copied().collect();
        while let Some(i) = stack.pop() {
            if core::mem::replace(&mut seen[i], true) {
                continue;
            }
            out.push(i);
            stack.extend(self.children(Some(self.ids[i])).iter().rev());
        }
        out
    }

    /// Flattens the hierarchy into display rows.
    ///
    /// The walk is depth-first and iterative. A collapsed parent keeps its own
    /// row, but its whole subtree is left out of the result. Events caught in
    /// a parent cycle (and so unreachable from any root) are emitted
    /// afterwards as if they were roots.
    #[must_use]
    pub fn rows(&self, collapsed: &CollapsedParents) -> Vec<Row> {
        let mut rows = Vec::with_capacity(self.len());
        let mut visited = vec![false; self.len()];

        for &root in self.roots() {
            self.walk(root, collapsed, &mut visited, &mut rows);
        }
        for i in 0..self.len() {
            if !visited[i] {
                self.walk(i, collapsed, &mut visited, &mut rows);
            }
        }
        rows
    }

    fn walk(
        &self,
        root: usize,
        collapsed: &CollapsedParents,
        visited: &mut [bool],
        rows: &mut Vec<Row>,
    ) {
        // (index, depth, hidden by a collapsed ancestor)
        let mut stack = vec![(root, 0_usize, false)];
        while let Some((i, depth, hidden)) = stack.pop() {
            if core::mem::replace(&mut visited[i], true) {
                continue;
            }
            let id = self.ids[i];
            let kids = self.children(Some(id));
            let is_collapsed = !kids.is_empty() && collapsed.is_collapsed(id);
            if !hidden {
                rows.push(Row {
                    index: i,
                    id,
                    depth,
                    has_children: !kids.is_empty(),
                    collapsed: is_collapsed,
                });
            }
            let hide_kids = hidden || is_collapsed;
            stack.extend(kids.iter().rev().map(|&k| (k, depth + 1, hide_kids)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[Row]) -> Vec<u64> {
        rows.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn children_sorted_by_start_then_display_order() {
        let events = [
            Event::new(1, "root").with_span(0, 100),
            Event::new(2, "late").at(50).with_parent(1),
            Event::new(3, "early").at(10).with_parent(1),
            Event::new(4, "tie-b").at(30).with_parent(1).with_display_order(2),
            Event::new(5, "tie-a").at(30).with_parent(1).with_display_order(1),
            Event::new(6, "untimed").with_parent(1),
        ];
        let h = EventHierarchy::new(&events);
        assert_eq!(h.children(Some(EventId(1))), &[5, 2, 4, 3, 1]);
        assert_eq!(h.roots(), &[0]);
    }

    #[test]
    fn rows_are_depth_first() {
        let events = [
            Event::new(1, "a").at(0),
            Event::new(2, "b").at(10),
            Event::new(3, "a1").at(1).with_parent(1),
            Event::new(4, "a1x").at(2).with_parent(3),
            Event::new(5, "a2").at(5).with_parent(1),
        ];
        let h = EventHierarchy::new(&events);
        let rows = h.rows(&CollapsedParents::new());
        assert_eq!(ids(&rows), [1, 3, 4, 5, 2]);
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, [0, 1, 2, 1, 0]);
        assert!(rows[0].has_children);
        assert!(!rows[4].has_children);
    }

    #[test]
    fn collapsed_parent_hides_entire_subtree() {
        let events = [
            Event::new(1, "p").at(0),
            Event::new(2, "c1").at(1).with_parent(1),
            Event::new(3, "c2").at(2).with_parent(1),
            Event::new(4, "g").at(3).with_parent(2),
            Event::new(5, "other").at(4),
        ];
        let h = EventHierarchy::new(&events);
        let mut collapsed = CollapsedParents::new();
        collapsed.toggle(EventId(1));

        let rows = h.rows(&collapsed);
        assert_eq!(ids(&rows), [1, 5]);
        assert!(rows[0].collapsed);
    }

    #[test]
    fn collapsing_a_leaf_has_no_effect() {
        let events = [Event::new(1, "leaf").at(0)];
        let h = EventHierarchy::new(&events);
        let mut collapsed = CollapsedParents::new();
        collapsed.collapse(EventId(1));
        let rows = h.rows(&collapsed);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].collapsed);
    }

    #[test]
    fn unknown_or_self_parent_becomes_root() {
        let events = [
            Event::new(1, "orphan").with_parent(99),
            Event::new(2, "selfie").with_parent(2),
        ];
        let h = EventHierarchy::new(&events);
        assert_eq!(h.roots(), &[0, 1]);
    }

    #[test]
    fn parent_cycles_terminate_and_keep_every_event() {
        let events = [
            Event::new(1, "a").with_parent(2),
            Event::new(2, "b").with_parent(1),
            Event::new(3, "root").at(0),
        ];
        let h = EventHierarchy::new(&events);
        let rows = h.rows(&CollapsedParents::new());
        assert_eq!(ids(&rows), [3, 1, 2]);
    }

    #[test]
    fn descendants_and_parents() {
        let events = [
            Event::new(1, "p").at(0),
            Event::new(2, "c").at(1).with_parent(1),
            Event::new(3, "g").at(2).with_parent(2),
        ];
        let h = EventHierarchy::new(&events);
        assert_eq!(h.descendants(EventId(1)), [1, 2]);
        let mut parents: Vec<EventId> = h.parents().collect();
        parents.sort();
        assert_eq!(parents, [EventId(1), EventId(2)]);
        assert_eq!(h.index_of(EventId(3)), Some(2));
        assert!(h.has_children(EventId(2)));
        assert!(!h.has_children(EventId(3)));
    }
}

//! Selection state behind the detail overlay.
//!
//! ```text
//!            select(x)              select(y)
//!   Closed ────────────▶ Open(x) ────────────▶ Open(y)
//!     ▲                    │
//!     └────── clear ───────┘
//! ```
//!
//! Selecting while open replaces the selection directly; there is no
//! intermediate `Closed`. There is no terminal state.

use crate::catalog::{Catalog, CatalogItem};

/// Zero or one open item, by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<Id> {
    #[default]
    Closed,
    Open(Id),
}

impl<Id> Selection<Id> {
    pub fn new() -> Self {
        Selection::Closed
    }

    pub fn select(&mut self, id: Id) {
        *self = Selection::Open(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn selected(&self) -> Option<&Id> {
        match self {
            Selection::Closed => None,
            Selection::Open(id) => Some(id),
        }
    }
}

impl<Id: PartialEq> Selection<Id> {
    /// Whether `id` is the open item; listings use it to mark that card.
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected() == Some(id)
    }
}

impl<Id> Selection<Id> {
    /// The selected record, if any. A selection whose id is not in the
    /// catalog resolves to nothing, which renders as a closed overlay.
    pub fn resolve<'a, T>(&self, catalog: &'a Catalog<T>) -> Option<&'a T>
    where
        T: CatalogItem<Id = Id>,
    {
        self.selected().and_then(|id| catalog.get(id))
    }
}

/// Neighbours of `id` within `visible`, for the overlay's prev/next controls.
///
/// Following either one is a direct `select`, never a `clear` then `select`.
pub fn neighbours<'a, T: CatalogItem>(
    visible: &[&'a T],
    id: &T::Id,
) -> (Option<&'a T>, Option<&'a T>) {
    let Some(pos) = visible.iter().position(|item| item.id() == id) else {
        return (None, None);
    };
    let prev = pos.checked_sub(1).map(|p| visible[p]);
    let next = visible.get(pos + 1).copied();
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GalleryEntry;

    fn entry(id: u32) -> GalleryEntry {
        GalleryEntry {
            id,
            title: format!("Entry {id}"),
            description: String::new(),
            category: "Productions".into(),
            date: String::new(),
            image: String::new(),
            location: String::new(),
            participants: vec![],
        }
    }

    #[test]
    fn starts_closed() {
        let selection: Selection<u32> = Selection::new();
        assert!(!selection.is_open());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn select_then_clear_closes_from_any_state() {
        let mut from_closed: Selection<u32> = Selection::Closed;
        from_closed.select(1);
        from_closed.clear();
        assert_eq!(from_closed, Selection::Closed);

        let mut from_open = Selection::Open(5);
        from_open.select(1);
        from_open.clear();
        assert_eq!(from_open, Selection::Closed);
    }

    #[test]
    fn select_replaces_directly() {
        let mut selection = Selection::new();
        selection.select(1);
        selection.select(2);
        assert_eq!(selection, Selection::Open(2));
    }

    #[test]
    fn select_two_then_one_then_clear() {
        let mut selection = Selection::new();
        selection.select(2);
        assert_eq!(selection, Selection::Open(2));
        selection.select(1);
        assert_eq!(selection, Selection::Open(1));
        selection.clear();
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn clear_when_closed_is_a_no_op() {
        let mut selection: Selection<u32> = Selection::Closed;
        selection.clear();
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn resolves_against_catalog() {
        let catalog = Catalog::new(vec![], vec![entry(1), entry(2)]).unwrap();
        let mut selection = Selection::new();
        assert!(selection.resolve(&catalog).is_none());
        selection.select(2);
        assert_eq!(selection.resolve(&catalog).map(|e| e.id), Some(2));
        selection.select(9);
        assert!(selection.resolve(&catalog).is_none());
    }

    #[test]
    fn is_selected_compares_ids() {
        let selection = Selection::Open(4u32);
        assert!(selection.is_selected(&4));
        assert!(!selection.is_selected(&5));
    }

    #[test]
    fn neighbours_within_visible_subset() {
        let items = [entry(1), entry(2), entry(3)];
        let visible: Vec<&GalleryEntry> = items.iter().collect();

        let (prev, next) = neighbours(&visible, &1);
        assert!(prev.is_none());
        assert_eq!(next.map(|e| e.id), Some(2));

        let (prev, next) = neighbours(&visible, &2);
        assert_eq!(prev.map(|e| e.id), Some(1));
        assert_eq!(next.map(|e| e.id), Some(3));

        let (prev, next) = neighbours(&visible, &3);
        assert_eq!(prev.map(|e| e.id), Some(2));
        assert!(next.is_none());

        assert_eq!(neighbours(&visible, &42).0.map(|e| e.id), None);
    }
}

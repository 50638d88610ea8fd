//! Fixed-capacity slot table with first-fit insertion.
//!
//! The slot index is the entity's id. Slots are never vacated, so once an
//! entity is placed its index never changes.

/// Identity comparison for entities stored in a [`SlotTable`].
///
/// Two values are "the same" when they are handles to one entity, regardless
/// of whether their fields happen to be equal.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

#[derive(Debug)]
pub(crate) struct SlotTable<T> {
    slots: Vec<Option<T>>,
}

impl<T: Identity + Clone> SlotTable<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Place `item` in the lowest empty slot, or return the slot it already
    /// occupies. `None` when every slot is taken by something else.
    pub(crate) fn insert(&mut self, item: &T) -> Option<usize> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            match slot {
                Some(existing) if existing.is_same(item) => return Some(index),
                Some(_) => {}
                None => {
                    *slot = Some(item.clone());
                    return Some(index);
                }
            }
        }
        None
    }

    pub(crate) fn position(&self, item: &T) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|existing| existing.is_same(item)))
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Occupied slots in index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str);

    impl Identity for Tag {
        fn is_same(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn first_fit_fills_lowest_index() {
        let mut table = SlotTable::new(3);
        assert_eq!(table.insert(&Tag("a")), Some(0));
        assert_eq!(table.insert(&Tag("b")), Some(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut table = SlotTable::new(2);
        table.insert(&Tag("a"));
        assert_eq!(table.insert(&Tag("a")), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn full_table_rejects_newcomers_but_finds_members() {
        let mut table = SlotTable::new(1);
        table.insert(&Tag("a"));
        assert_eq!(table.insert(&Tag("b")), None);
        assert_eq!(table.insert(&Tag("a")), Some(0));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let table: SlotTable<Tag> = SlotTable::new(2);
        assert!(table.get(0).is_none());
        assert!(table.get(7).is_none());
    }
}

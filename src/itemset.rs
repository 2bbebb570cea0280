//! Preference sets: unordered collections of unique item identifiers.
//!
//! A preference set is the list of items one user viewed, bought or clicked.
//! It is a sparse binary feature vector over the item universe, represented
//! as a set of the item ids with a positive signal. Callers own their
//! `ItemSet`s; the recommender only reads them.

use std::collections::HashSet;

/// Opaque item identifier.
pub type ItemId = u64;

/// An unordered collection of unique item identifiers.
///
/// Supports iteration and membership testing; no ordering is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    items: HashSet<ItemId>,
}

impl ItemSet {
    /// Create an empty item set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item. Returns `false` if the item was already present.
    pub fn insert(&mut self, item: ItemId) -> bool {
        self.items.insert(item)
    }

    /// Test whether an item is present.
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Iterate over the item ids in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemId> for ItemSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[ItemId; N]> for ItemSet {
    fn from(items: [ItemId; N]) -> Self {
        items.into_iter().collect()
    }
}

impl Extend<ItemId> for ItemSet {
    fn extend<I: IntoIterator<Item = ItemId>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = ItemId;
    type IntoIter = std::iter::Copied<std::collections::hash_set::Iter<'a, ItemId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

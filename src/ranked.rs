//! Bounded, ordered result container for ranked recommendations.

use crate::itemset::ItemId;

/// A single ranked recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    pub item: ItemId,
    pub score: f64,
}

/// A capacity-limited list of `(item, score)` pairs in non-increasing score
/// order, ties broken by ascending item id.
///
/// The capacity is supplied by the caller per query (`max_items`), not chosen
/// by the container. Inserting into a full list drops the lowest-ranked entry
/// when the new entry outranks it, otherwise the insert is rejected.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItemList {
    capacity: usize,
    entries: Vec<RankedItem>,
}

impl RankedItemList {
    /// Create an empty list with zero capacity.
    ///
    /// The recommender resets the capacity to `max_items` on each query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Clear the list and set a new capacity.
    pub fn reset(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.clear();
    }

    /// Insert an entry, preserving rank order and the capacity bound.
    ///
    /// Returns `true` if the entry was retained.
    pub fn insert(&mut self, item: ItemId, score: f64) -> bool {
        let pos = self.entries.partition_point(|e| {
            e.score > score || (e.score == score && e.item < item)
        });
        if pos >= self.capacity {
            return false;
        }
        self.entries.insert(pos, RankedItem { item, score });
        self.entries.truncate(self.capacity);
        true
    }

    /// The ranked entries, best first.
    pub fn items(&self) -> &[RankedItem] {
        &self.entries
    }

    /// Iterate over the ranked entries, best first.
    pub fn iter(&self) -> impl Iterator<Item = &RankedItem> {
        self.entries.iter()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the list will retain.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_descending_score_order() {
        let mut list = RankedItemList::with_capacity(4);
        list.insert(1, 0.3);
        list.insert(2, 0.9);
        list.insert(3, 0.5);

        let scores: Vec<f64> = list.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![0.9, 0.5, 0.3]);
    }

    #[test]
    fn enforces_capacity() {
        let mut list = RankedItemList::with_capacity(2);
        assert!(list.insert(1, 0.1));
        assert!(list.insert(2, 0.2));
        assert!(list.insert(3, 0.3));
        assert!(!list.insert(4, 0.05));

        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].item, 3);
        assert_eq!(list.items()[1].item, 2);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut list = RankedItemList::with_capacity(0);
        assert!(!list.insert(1, 1.0));
        assert!(list.is_empty());
    }

    #[test]
    fn ties_rank_by_ascending_item_id() {
        let mut list = RankedItemList::with_capacity(3);
        list.insert(9, 0.5);
        list.insert(4, 0.5);
        list.insert(7, 0.5);

        let items: Vec<ItemId> = list.iter().map(|e| e.item).collect();
        assert_eq!(items, vec![4, 7, 9]);
    }

    #[test]
    fn reset_clears_and_rebounds() {
        let mut list = RankedItemList::with_capacity(2);
        list.insert(1, 1.0);
        list.reset(1);
        assert!(list.is_empty());
        list.insert(2, 0.5);
        list.insert(3, 0.6);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].item, 3);
    }
}

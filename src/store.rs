//! Append-only storage for ingested preference sets and their signatures.

use crate::itemset::ItemSet;
use crate::signature::Signature;

/// Dense identifier assigned to a preference set by the store.
pub type RecordId = usize;

/// One ingested preference set together with its signature. Immutable once
/// stored.
#[derive(Debug, Clone)]
pub struct PreferenceSetRecord {
    item_set: ItemSet,
    signature: Signature,
}

impl PreferenceSetRecord {
    /// The stored preference set.
    pub fn item_set(&self) -> &ItemSet {
        &self.item_set
    }

    /// The stored signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Holds every accepted preference set. Append-only: no update or delete.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    records: Vec<PreferenceSetRecord>,
}

impl PreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a preference set with its signature and return the assigned id.
    ///
    /// An empty item set carries no similarity signal and would corrupt band
    /// statistics, so it is rejected with `None` rather than stored.
    pub fn add(&mut self, item_set: ItemSet, signature: Signature) -> Option<RecordId> {
        if item_set.is_empty() {
            return None;
        }
        let id = self.records.len();
        self.records.push(PreferenceSetRecord { item_set, signature });
        Some(id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&PreferenceSetRecord> {
        self.records.get(id)
    }

    /// Number of stored preference sets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::HashFamily;

    #[test]
    fn assigns_dense_ids() {
        let family = HashFamily::with_seed(16, 0);
        let mut store = PreferenceStore::new();

        let a = ItemSet::from([1]);
        let b = ItemSet::from([2]);
        assert_eq!(store.add(a.clone(), family.signature(&a)), Some(0));
        assert_eq!(store.add(b.clone(), family.signature(&b)), Some(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejects_empty_set_as_no_op() {
        let family = HashFamily::with_seed(16, 0);
        let mut store = PreferenceStore::new();

        let empty = ItemSet::new();
        assert_eq!(store.add(empty.clone(), family.signature(&empty)), None);
        assert!(store.is_empty());
    }

    #[test]
    fn get_returns_stored_record() {
        let family = HashFamily::with_seed(16, 0);
        let mut store = PreferenceStore::new();

        let set = ItemSet::from([1, 2, 3]);
        let sig = family.signature(&set);
        let id = store.add(set.clone(), sig.clone()).unwrap();

        let record = store.get(id).unwrap();
        assert_eq!(record.item_set(), &set);
        assert_eq!(record.signature(), &sig);
        assert!(store.get(99).is_none());
    }
}

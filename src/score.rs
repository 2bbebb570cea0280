//! Similarity-weighted score aggregation over candidate preference sets.
//!
//! Each candidate contributes its estimated similarity to every item it holds
//! that the query does not. Scores are summed, so an item recommended by
//! several similar neighbors outranks one backed by a single neighbor of the
//! same similarity.

use std::collections::HashMap;

use crate::itemset::{ItemId, ItemSet};
use crate::signature::Signature;
use crate::store::{PreferenceStore, RecordId};

/// Score candidate records against the query and return `(item, score)` pairs
/// sorted by score descending, ties by ascending item id.
///
/// Items already present in the query set are excluded unconditionally.
pub fn aggregate_scores(
    query: &ItemSet,
    query_signature: &Signature,
    candidates: impl IntoIterator<Item = RecordId>,
    store: &PreferenceStore,
) -> Vec<(ItemId, f64)> {
    let mut scores: HashMap<ItemId, f64> = HashMap::new();

    for id in candidates {
        let Some(record) = store.get(id) else { continue };
        let similarity = query_signature.estimate(record.signature());
        if similarity == 0.0 {
            continue;
        }
        for item in record.item_set() {
            if !query.contains(item) {
                *scores.entry(item).or_insert(0.0) += similarity;
            }
        }
    }

    let mut ranked: Vec<(ItemId, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

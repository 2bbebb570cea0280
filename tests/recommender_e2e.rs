//! End-to-end recommendation scenarios.

use kindred::{ItemSet, MinHashParams, MinHashRecommender, RankedItemList, UserRecommender};

/// One band per hash function: any agreeing signature component retrieves a
/// candidate, so moderately similar neighbors are found with near certainty.
fn recall_params() -> MinHashParams {
    MinHashParams {
        num_hashes: 128,
        bands: 128,
        seed: 42,
    }
}

#[test]
fn overlapping_neighbors_beat_disjoint_ones() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3]));
    rec.add_preference_set(&ItemSet::from([2, 3, 4]));
    rec.add_preference_set(&ItemSet::from([5, 6, 7]));

    let mut result = RankedItemList::new();
    rec.get_recommendations(&ItemSet::from([1, 2, 3]), 2, &mut result);

    // Item 4 is backed by a neighbor sharing {2, 3} with the query; items
    // from the disjoint set {5, 6, 7} carry no similarity evidence.
    assert!(!result.is_empty());
    assert_eq!(result.items()[0].item, 4);
    for entry in result.iter().skip(1) {
        assert!(entry.score < result.items()[0].score);
    }
}

#[test]
fn no_self_recommendation() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3]));
    rec.add_preference_set(&ItemSet::from([1, 2, 3, 4, 5]));
    rec.add_preference_set(&ItemSet::from([2, 3, 9]));

    let query = ItemSet::from([1, 2, 3]);
    let mut result = RankedItemList::new();
    rec.get_recommendations(&query, 10, &mut result);

    for entry in result.iter() {
        assert!(!query.contains(entry.item), "recommended a query item: {}", entry.item);
    }
}

#[test]
fn output_is_bounded_by_max_items() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3, 4, 5, 6, 7, 8, 9]));

    let mut result = RankedItemList::new();
    rec.get_recommendations(&ItemSet::from([1, 2, 3]), 3, &mut result);
    assert!(result.len() <= 3);

    rec.get_recommendations(&ItemSet::from([1, 2, 3]), 0, &mut result);
    assert!(result.is_empty());
}

#[test]
fn requery_is_idempotent() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3, 10]));
    rec.add_preference_set(&ItemSet::from([2, 3, 11]));
    rec.add_preference_set(&ItemSet::from([1, 3, 12]));

    let query = ItemSet::from([1, 2, 3]);
    let mut first = RankedItemList::new();
    let mut second = RankedItemList::new();
    rec.get_recommendations(&query, 5, &mut first);
    rec.get_recommendations(&query, 5, &mut second);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.item, b.item);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn empty_inputs_are_degenerate_not_errors() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3]));

    rec.add_preference_set(&ItemSet::new());
    assert_eq!(rec.len(), 1);

    let mut result = RankedItemList::new();
    rec.get_recommendations(&ItemSet::new(), 5, &mut result);
    assert!(result.is_empty());
}

#[test]
fn same_seed_means_same_recommendations() {
    let build = || {
        let mut rec = MinHashRecommender::new(recall_params()).unwrap();
        rec.add_preference_set(&ItemSet::from([1, 2, 3, 20]));
        rec.add_preference_set(&ItemSet::from([2, 3, 21]));
        rec
    };
    let (a, b) = (build(), build());

    let query = ItemSet::from([1, 2, 3]);
    let mut result_a = RankedItemList::new();
    let mut result_b = RankedItemList::new();
    a.get_recommendations(&query, 10, &mut result_a);
    b.get_recommendations(&query, 10, &mut result_b);

    assert_eq!(result_a.items().len(), result_b.items().len());
    for (x, y) in result_a.iter().zip(result_b.iter()) {
        assert_eq!(x.item, y.item);
        assert_eq!(x.score, y.score);
    }
}

#[test]
fn result_list_is_replaced_between_queries() {
    let mut rec = MinHashRecommender::new(recall_params()).unwrap();
    rec.add_preference_set(&ItemSet::from([1, 2, 3, 4]));

    let mut result = RankedItemList::new();
    rec.get_recommendations(&ItemSet::from([1, 2, 3]), 5, &mut result);
    let first_len = result.len();

    // A query with no signal must clear out the previous contents.
    rec.get_recommendations(&ItemSet::new(), 5, &mut result);
    assert!(result.is_empty());

    rec.get_recommendations(&ItemSet::from([1, 2, 3]), 5, &mut result);
    assert_eq!(result.len(), first_len);
}

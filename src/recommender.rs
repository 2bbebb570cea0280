//! The recommender contract and its MinHash/LSH implementation.

use rand::Rng;

use crate::bands::BandIndex;
use crate::error::{KindredError, Result};
use crate::itemset::ItemSet;
use crate::ranked::RankedItemList;
use crate::score::aggregate_scores;
use crate::signature::HashFamily;
use crate::store::PreferenceStore;

/// A user recommender generates personalized recommendations from binary
/// user→item signals.
///
/// Input data is added by calling [`add_preference_set`] repeatedly with
/// preference sets: sets of items viewed/bought/clicked by the same user.
/// The single query, [`get_recommendations`], ranks items similar to a query
/// point, which is itself a preference set.
///
/// The trait is object-safe; hosts may hold `Box<dyn UserRecommender>` and
/// swap similarity strategies. Every implementation must honor the same
/// edge-case policy: empty preference sets are ignored on ingestion, and an
/// empty query point or `max_items == 0` yields an empty result.
///
/// [`add_preference_set`]: UserRecommender::add_preference_set
/// [`get_recommendations`]: UserRecommender::get_recommendations
pub trait UserRecommender {
    /// Add a preference set to the recommender. A no-op for an empty set.
    fn add_preference_set(&mut self, preference_set: &ItemSet);

    /// Write up to `max_items` ranked items most similar to the query point
    /// into `result`, replacing its previous contents.
    fn get_recommendations(
        &self,
        query_point: &ItemSet,
        max_items: usize,
        result: &mut RankedItemList,
    );
}

/// Construction parameters for [`MinHashRecommender`].
///
/// `num_hashes` is the signature length K; `bands` is the LSH band count B.
/// K must be a positive multiple of B; the band width is r = K / B. All
/// three are fixed for the lifetime of the recommender so stored and query
/// signatures stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinHashParams {
    /// Number of hash functions K (signature length).
    pub num_hashes: usize,
    /// Number of LSH bands B.
    pub bands: usize,
    /// Master seed for the hash family.
    pub seed: u64,
}

impl Default for MinHashParams {
    /// 128 hashes in 16 bands of 8 rows, threshold ≈ 0.71.
    fn default() -> Self {
        Self {
            num_hashes: 128,
            bands: 16,
            seed: 42,
        }
    }
}

impl MinHashParams {
    /// Parameters with a seed drawn from the thread-local RNG, for hosts
    /// that do not need reproducible signatures.
    pub fn random(num_hashes: usize, bands: usize) -> Self {
        Self {
            num_hashes,
            bands,
            seed: rand::thread_rng().gen(),
        }
    }

    /// Band width r = K / B.
    pub fn rows_per_band(&self) -> usize {
        self.num_hashes / self.bands
    }

    fn validate(&self) -> Result<()> {
        if self.num_hashes == 0 {
            return Err(KindredError::InvalidParameter(
                "num_hashes must be positive".into(),
            ));
        }
        if self.bands == 0 {
            return Err(KindredError::InvalidParameter(
                "bands must be positive".into(),
            ));
        }
        if self.bands > self.num_hashes || self.num_hashes % self.bands != 0 {
            return Err(KindredError::InvalidParameter(format!(
                "num_hashes ({}) must be a positive multiple of bands ({})",
                self.num_hashes, self.bands
            )));
        }
        Ok(())
    }
}

/// MinHash-based user recommender.
///
/// Ingestion signs each preference set with a fixed hash family, stores it,
/// and indexes its signature under B LSH bands. A query signs the query
/// point, pulls candidates that collide with it in at least one band,
/// estimates each candidate's Jaccard similarity from signature agreement,
/// and sum-aggregates similarity onto the candidate's items.
///
/// The recommender exclusively owns its store and band index and is
/// deliberately not `Clone`. It takes `&mut self` to ingest and `&self` to
/// query; a host wrapping it in an `RwLock` gets the required single-writer/
/// multi-reader discipline and snapshot-consistent queries for free.
#[derive(Debug)]
pub struct MinHashRecommender {
    params: MinHashParams,
    family: HashFamily,
    store: PreferenceStore,
    index: BandIndex,
}

impl MinHashRecommender {
    /// Build a recommender, rejecting invalid `(num_hashes, bands)` combos.
    pub fn new(params: MinHashParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            family: HashFamily::with_seed(params.num_hashes, params.seed),
            store: PreferenceStore::new(),
            index: BandIndex::new(params.bands, params.rows_per_band()),
            params,
        })
    }

    /// The construction parameters.
    pub fn params(&self) -> &MinHashParams {
        &self.params
    }

    /// Number of accepted preference sets.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no preference sets have been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl UserRecommender for MinHashRecommender {
    fn add_preference_set(&mut self, preference_set: &ItemSet) {
        if preference_set.is_empty() {
            return;
        }
        let signature = self.family.signature(preference_set);
        if let Some(id) = self.store.add(preference_set.clone(), signature.clone()) {
            self.index.insert(id, &signature);
        }
    }

    fn get_recommendations(
        &self,
        query_point: &ItemSet,
        max_items: usize,
        result: &mut RankedItemList,
    ) {
        result.reset(max_items);
        if max_items == 0 || query_point.is_empty() {
            return;
        }

        let query_signature = self.family.signature(query_point);
        let candidates = self.index.candidates(&query_signature);
        if candidates.is_empty() {
            return;
        }

        let ranked = aggregate_scores(query_point, &query_signature, candidates, &self.store);
        for (item, score) in ranked.into_iter().take(max_items) {
            result.insert(item, score);
        }
    }
}

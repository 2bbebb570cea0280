//! MinHash signature generation and Jaccard similarity estimation.
//!
//! For each of K seeded hash functions h_i, the i-th signature component of a
//! set S is min_{x ∈ S} h_i(x). For two sets A and B,
//!
//! ```text
//! P[min h_i(A) = min h_i(B)] = |A ∩ B| / |A ∪ B| = Jaccard(A, B)
//! ```
//!
//! so the fraction of matching components is an unbiased estimate of the true
//! Jaccard similarity, with standard error on the order of 1/√K. Typical K is
//! 64-256.
//!
//! ## References
//!
//! - Broder (1997). "On the resemblance and containment of documents"
//! - Broder et al. (2000). "Min-wise independent permutations"

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::itemset::{ItemId, ItemSet};

/// A family of K independently seeded hash functions.
///
/// The family is fixed for the lifetime of a recommender so every signature
/// it ever produces stays comparable. Each instance owns its seeds; nothing
/// is shared between instances.
#[derive(Debug, Clone)]
pub struct HashFamily {
    seeds: Vec<u64>,
}

impl HashFamily {
    /// Derive K hash-function seeds deterministically from one master seed.
    pub fn with_seed(num_hashes: usize, seed: u64) -> Self {
        let mut seeds = Vec::with_capacity(num_hashes);
        let mut state = seed;
        for _ in 0..num_hashes {
            // LCG expansion of the master seed
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            seeds.push(state);
        }
        Self { seeds }
    }

    /// Number of hash functions (signature length K).
    pub fn num_hashes(&self) -> usize {
        self.seeds.len()
    }

    /// Compute the MinHash signature of an item set.
    ///
    /// An empty set yields the sentinel signature (all components `u64::MAX`),
    /// which [`Signature::estimate`] treats as similar to nothing.
    pub fn signature(&self, items: &ItemSet) -> Signature {
        let mut mins = vec![u64::MAX; self.seeds.len()];
        for item in items {
            for (i, &seed) in self.seeds.iter().enumerate() {
                let h = hash_with_seed(item, seed);
                if h < mins[i] {
                    mins[i] = h;
                }
            }
        }
        Signature { values: mins }
    }
}

fn hash_with_seed(item: ItemId, seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    item.hash(&mut hasher);
    hasher.finish()
}

/// A fixed-length MinHash signature of an item set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    values: Vec<u64>,
}

impl Signature {
    /// The signature components.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Signature length K.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the signature has no components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether this is the sentinel signature of an empty item set.
    pub fn is_sentinel(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&v| v == u64::MAX)
    }

    /// Estimate the Jaccard similarity to another signature, in [0, 1].
    ///
    /// Computes the fraction of matching components. Sentinel signatures
    /// estimate 0 against everything, including each other: an empty set
    /// carries no similarity signal. Signatures of different lengths come
    /// from different hash families and also estimate 0.
    pub fn estimate(&self, other: &Signature) -> f64 {
        debug_assert_eq!(
            self.values.len(),
            other.values.len(),
            "signatures from different hash families are not comparable"
        );
        if self.values.len() != other.values.len() || self.values.is_empty() {
            return 0.0;
        }
        if self.is_sentinel() || other.is_sentinel() {
            return 0.0;
        }

        let matches = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();

        matches as f64 / self.values.len() as f64
    }
}

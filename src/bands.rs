//! LSH band index over MinHash signatures.
//!
//! The signature is split into B disjoint bands of r consecutive components
//! (K = B·r). Each band is hashed to a bucket key; a stored record is a
//! candidate for a query if they share at least one band. Two sets with true
//! similarity s agree on one band with probability s^r, and on at least one
//! of B bands with probability 1 − (1 − s^r)^B, which gives an S-shaped
//! retrieval curve with inflection near (1/B)^(1/r). Tuning (K, B, r) trades
//! precision against recall.
//!
//! Misses are possible (a truly similar pair may share no band); a record is
//! only ever returned because one of its bands matched the query exactly, so
//! the candidate set stays small and lookups stay sub-linear.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::signature::Signature;
use crate::store::RecordId;

/// Maps (band index, band value) to the record ids sharing that band value.
#[derive(Debug, Clone)]
pub struct BandIndex {
    bands: usize,
    rows_per_band: usize,
    tables: Vec<HashMap<u64, Vec<RecordId>>>,
}

impl BandIndex {
    /// Create an index with B bands of r rows each.
    ///
    /// Signatures passed to [`insert`](Self::insert) and
    /// [`candidates`](Self::candidates) must have length B·r.
    pub fn new(bands: usize, rows_per_band: usize) -> Self {
        Self {
            bands,
            rows_per_band,
            tables: (0..bands).map(|_| HashMap::new()).collect(),
        }
    }

    /// Number of bands B.
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Band width r.
    pub fn rows_per_band(&self) -> usize {
        self.rows_per_band
    }

    /// Approximate similarity threshold for this configuration, (1/B)^(1/r).
    pub fn threshold(&self) -> f64 {
        (1.0 / self.bands as f64).powf(1.0 / self.rows_per_band as f64)
    }

    /// Insert a record under each of its B band keys.
    pub fn insert(&mut self, record_id: RecordId, signature: &Signature) {
        debug_assert_eq!(signature.len(), self.bands * self.rows_per_band);
        for (table, key) in self.tables.iter_mut().zip(band_keys(signature, self.rows_per_band)) {
            table.entry(key).or_default().push(record_id);
        }
    }

    /// Record ids sharing at least one band with the query signature.
    ///
    /// Returns an empty set when nothing collides; callers must treat that as
    /// "no recommendations", never fall back to scanning the whole store.
    pub fn candidates(&self, signature: &Signature) -> HashSet<RecordId> {
        debug_assert_eq!(signature.len(), self.bands * self.rows_per_band);
        let mut candidates = HashSet::new();
        for (table, key) in self.tables.iter().zip(band_keys(signature, self.rows_per_band)) {
            if let Some(ids) = table.get(&key) {
                candidates.extend(ids.iter().copied());
            }
        }
        candidates
    }
}

/// Bucket keys for each width-r chunk of the signature.
fn band_keys(signature: &Signature, rows_per_band: usize) -> SmallVec<[u64; 32]> {
    signature
        .values()
        .chunks(rows_per_band)
        .map(hash_band)
        .collect()
}

fn hash_band(chunk: &[u64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for v in chunk {
        v.hash(&mut hasher);
    }
    hasher.finish()
}

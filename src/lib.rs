//! kindred: user-to-user recommendations from implicit preference data.
//!
//! Input is sparse and binary: per user, the set of items viewed, bought or
//! clicked (a "preference set"). kindred estimates set similarity between a
//! query preference set and everything ingested so far, then aggregates
//! neighbor evidence into a ranked list of recommended items — without ever
//! comparing the query against all stored sets.
//!
//! # How it works
//!
//! 1. **MinHash signatures** ([`signature`]): each preference set is mapped
//!    to K minimum hash values. The probability that two signatures agree in
//!    one component equals the true Jaccard similarity of the underlying
//!    sets, so the fraction of agreeing components is an unbiased similarity
//!    estimate with standard error ~1/√K.
//! 2. **LSH banding** ([`bands`]): signatures are split into B bands of
//!    r = K/B components and each band is hashed into a table. Sets with
//!    similarity s collide in at least one band with probability
//!    1 − (1 − s^r)^B, turning approximate similarity search into a handful
//!    of exact-match lookups.
//! 3. **Score aggregation** ([`score`]): each candidate neighbor contributes
//!    its estimated similarity to every item the query lacks; sums are
//!    ranked score-descending with ascending-id tie-breaks.
//!
//! # Example
//!
//! ```
//! use kindred::{ItemSet, MinHashParams, MinHashRecommender, RankedItemList, UserRecommender};
//!
//! let mut rec = MinHashRecommender::new(MinHashParams::default())?;
//! rec.add_preference_set(&ItemSet::from([1, 2, 3]));
//! rec.add_preference_set(&ItemSet::from([2, 3, 4]));
//!
//! let mut result = RankedItemList::new();
//! rec.get_recommendations(&ItemSet::from([1, 2, 3]), 10, &mut result);
//! # Ok::<(), kindred::KindredError>(())
//! ```
//!
//! # Trade-offs
//!
//! The band index can miss truly similar neighbors (false negatives); a
//! record is only retrieved when it agrees with the query on one full band,
//! so far-away sets are practically never retrieved and query cost stays
//! sub-linear in the store size. (K, B, r) tune this: wider bands (larger r)
//! raise precision, more bands (larger B) raise recall. The inflection point
//! of the retrieval curve sits near (1/B)^(1/r).
//!
//! # Concurrency
//!
//! The engine is synchronous. Ingestion takes `&mut self` and queries take
//! `&self`, so the borrow checker enforces the single-writer/multi-reader
//! discipline the index needs; a host that wraps a recommender in an
//! `RwLock` gets snapshot-consistent queries.

pub mod bands;
pub mod error;
pub mod itemset;
pub mod ranked;
pub mod recommender;
pub mod score;
pub mod signature;
pub mod store;

pub use bands::BandIndex;
pub use error::{KindredError, Result};
pub use itemset::{ItemId, ItemSet};
pub use ranked::{RankedItem, RankedItemList};
pub use recommender::{MinHashParams, MinHashRecommender, UserRecommender};
pub use score::aggregate_scores;
pub use signature::{HashFamily, Signature};
pub use store::{PreferenceSetRecord, PreferenceStore, RecordId};

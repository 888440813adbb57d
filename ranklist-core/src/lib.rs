//! RankList Core - Rank-Aware Skip List
//!
//! An ordered index for real-time ranking services, providing:
//! - O(log n) insert and delete by (score, payload)
//! - O(log n) "rank of element" and "element at rank" queries
//! - Score-bounded and rank-bounded range queries and range deletes
//!
//! # Architecture
//!
//! The index is a probabilistic skip list whose forward links each carry a
//! span, the number of level-0 positions the link skips:
//!
//! - **Level Generator**: seeded geometric height assignment
//! - **Node arena**: nodes addressed by stable slot indices, one back-reference each
//! - **Traversal**: a single descent primitive shared by every query and mutation
//!
//! Elements are ordered by score first, then by the payload's [`Ord`]
//! implementation. Two payloads comparing [`Equal`](std::cmp::Ordering::Equal)
//! are the same identity; inserting the same (score, identity) twice is a
//! caller error the list does not detect.

pub mod skiplist;

mod error;
mod types;

pub use error::{RankListError, Result};
pub use skiplist::{Iter, Range, SkipList, SkipListConfig};
pub use types::*;

/// RankList version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod config {
    /// Default maximum node height, enough for ~4^12 (16M) elements at p = 1/4
    pub const MAX_LEVEL: usize = 12;

    /// Hard upper bound accepted for `max_level`
    pub const MAX_LEVEL_LIMIT: usize = 32;

    /// A node is promoted one level with probability 1 / BRANCHING_FACTOR
    pub const BRANCHING_FACTOR: u32 = 4;

    /// Seed used by `SkipList::default()`
    pub const DEFAULT_SEED: u64 = 0x5EED_1CE5;
}

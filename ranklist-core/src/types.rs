//! Core types for RankList

use std::fmt;

/// Primary sort key of every element
pub type Score = u32;

/// Handle to a live element, returned by `SkipList::insert`
///
/// A handle stays valid until its element is deleted. After that the slot
/// may be recycled by a later insert, so stale handles must not be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot backing this handle
    pub fn slot(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Traversal direction for `SkipList::walk`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// From the lowest element towards the highest
    #[default]
    Ascending,
    /// From the highest element (the tail) towards the lowest
    Descending,
}

//! Skip list node representation

use crate::Score;
use std::cmp::Ordering;

/// One level of a node: the next node at this level and the number of
/// level-0 positions between the two.
///
/// A link with no forward node spans the elements remaining after its owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Link {
    pub forward: Option<usize>,
    pub span: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub score: Score,
    pub value: T,
    /// Sized to the node's height, fixed for its lifetime
    pub levels: Vec<Link>,
    /// Level-0 predecessor, `None` for the first element. Never owns.
    pub backward: Option<usize>,
}

impl<T> Node<T> {
    pub fn new(score: Score, value: T, level: usize) -> Self {
        Self {
            score,
            value,
            levels: vec![Link::default(); level],
            backward: None,
        }
    }

    pub fn height(&self) -> usize {
        self.levels.len()
    }

    pub fn next(&self) -> Option<usize> {
        self.levels[0].forward
    }
}

impl<T: Ord> Node<T> {
    /// Strictly before `(score, value)` in the total order
    pub fn precedes(&self, score: Score, value: &T) -> bool {
        self.score < score || (self.score == score && self.value.cmp(value) == Ordering::Less)
    }

    /// Before or equal to `(score, value)` in the total order
    pub fn not_after(&self, score: Score, value: &T) -> bool {
        self.score < score || (self.score == score && self.value.cmp(value) != Ordering::Greater)
    }

    /// Same score and same identity
    pub fn matches(&self, score: Score, value: &T) -> bool {
        self.score == score && self.value.cmp(value) == Ordering::Equal
    }
}

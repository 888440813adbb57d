//! Level-0 iteration

use super::list::SkipList;
use crate::{Direction, Score};
use std::iter::FusedIterator;

/// Iterator over `(score, &value)` in ascending order
pub struct Iter<'a, T> {
    list: &'a SkipList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Score, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let node = self.list.node(idx);
        self.front = node.next();
        self.remaining -= 1;
        Some((node.score, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let node = self.list.node(idx);
        self.back = node.backward;
        self.remaining -= 1;
        Some((node.score, &node.value))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterator over the elements of a score range, lowest first
pub struct Range<'a, T> {
    list: &'a SkipList<T>,
    next: Option<usize>,
    max: Score,
}

impl<'a, T> Range<'a, T> {
    pub(super) fn new(list: &'a SkipList<T>, start: Option<usize>, max: Score) -> Self {
        Self {
            list,
            next: start,
            max,
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = (Score, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.node(idx);
        if node.score > self.max {
            self.next = None;
            return None;
        }
        self.next = node.next();
        Some((node.score, &node.value))
    }
}

impl<T> SkipList<T> {
    /// Iterate over all entries in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head[0].forward,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Visit elements one by one from either end
    ///
    /// `visitor` receives each element's ascending 1-based rank and its
    /// payload; returning `false` stops the walk.
    pub fn walk<F>(&self, direction: Direction, mut visitor: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        match direction {
            Direction::Ascending => {
                let mut rank = 1;
                let mut x = self.head[0].forward;
                while let Some(idx) = x {
                    let node = self.node(idx);
                    if !visitor(rank, &node.value) {
                        break;
                    }
                    rank += 1;
                    x = node.next();
                }
            }
            Direction::Descending => {
                let mut rank = self.len;
                let mut x = self.tail;
                while let Some(idx) = x {
                    let node = self.node(idx);
                    if !visitor(rank, &node.value) {
                        break;
                    }
                    rank -= 1;
                    x = node.backward;
                }
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a SkipList<T> {
    type Item = (Score, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Rank and position queries

use super::list::SkipList;
use crate::Score;
use tracing::debug;

impl<T> SkipList<T> {
    /// Find the element at a 1-based rank
    pub fn get_element_by_rank(&self, rank: usize) -> Option<(Score, &T)> {
        self.index_at(rank).map(|idx| self.entry(idx))
    }

    pub(super) fn index_at(&self, rank: usize) -> Option<usize> {
        if rank == 0 || rank > self.len {
            return None;
        }

        let mut traversed = 0;
        let mut x = None;
        for i in (0..self.level).rev() {
            while let Some(next) = self.links(x)[i].forward {
                let span = self.links(x)[i].span;
                if traversed + span > rank {
                    break;
                }
                traversed += span;
                x = Some(next);
            }
            if traversed == rank {
                return x;
            }
        }
        None
    }

    /// Delete elements with rank in `[start, end]`, 1-based and inclusive
    ///
    /// Returns the number of elements removed.
    pub fn delete_range_by_rank(&mut self, start: usize, end: usize) -> usize {
        let start = start.max(1);
        let end = end.min(self.len);
        if start > end {
            return 0;
        }

        // Each removal shifts later ranks down by one, so `start` is
        // re-targeted with a fresh descent every time.
        let mut removed = 0;
        for _ in start..=end {
            let descent = self.descend(|traversed, span, _| traversed + span < start);
            match self.successor(&descent) {
                Some(idx) => {
                    self.delete_node(idx, &descent);
                    removed += 1;
                }
                None => break,
            }
        }

        debug!("Deleted {} elements by rank [{}, {}]", removed, start, end);
        removed
    }

    /// Up to `n` payloads from the highest end, best first
    pub fn get_top_range(&self, n: usize) -> Vec<&T> {
        let mut out = Vec::with_capacity(n.min(self.len));
        let mut x = self.tail;
        while let Some(idx) = x {
            if out.len() == n {
                break;
            }
            let node = self.node(idx);
            out.push(&node.value);
            x = node.backward;
        }
        out
    }

    /// Payloads around `rank`: up to `up` lower-ranked neighbours, the element
    /// itself, then up to `down` higher-ranked neighbours, in ascending order.
    ///
    /// Empty when `rank` is out of range.
    pub fn get_near_range(&self, rank: usize, up: usize, down: usize) -> Vec<&T> {
        let Some(anchor) = self.index_at(rank) else {
            return Vec::new();
        };

        let cap = up.saturating_add(down).saturating_add(1).min(self.len);
        let mut out = Vec::with_capacity(cap);
        let mut x = self.node(anchor).backward;
        while let Some(idx) = x {
            if out.len() == up {
                break;
            }
            let node = self.node(idx);
            out.push(&node.value);
            x = node.backward;
        }
        out.reverse();

        out.push(&self.node(anchor).value);

        let mut x = self.node(anchor).next();
        let mut taken = 0;
        while let Some(idx) = x {
            if taken == down {
                break;
            }
            let node = self.node(idx);
            out.push(&node.value);
            taken += 1;
            x = node.next();
        }
        out
    }
}

impl<T: Ord> SkipList<T> {
    /// Find the 1-based rank of `(score, value)`
    pub fn get_rank(&self, score: Score, value: &T) -> Option<usize> {
        let mut rank = 0;
        let mut x = None;

        for i in (0..self.level).rev() {
            while let Some(next) = self.links(x)[i].forward {
                if !self.node(next).not_after(score, value) {
                    break;
                }
                rank += self.links(x)[i].span;
                x = Some(next);
            }

            // x may still be the head
            if let Some(idx) = x {
                if self.node(idx).matches(score, value) {
                    return Some(rank);
                }
            }
        }
        None
    }
}

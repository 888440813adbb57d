//! Score-bounded range queries

use super::iter::Range;
use super::list::SkipList;
use crate::Score;
use tracing::debug;

impl<T> SkipList<T> {
    /// Check whether any element has a score in `[min, max]`
    pub fn is_in_range(&self, min: Score, max: Score) -> bool {
        if min > max {
            return false;
        }
        match (self.head[0].forward, self.tail) {
            (Some(first), Some(last)) => {
                self.node(first).score <= max && self.node(last).score >= min
            }
            _ => false,
        }
    }

    /// First element with a score in `[min, max]`
    pub fn first_in_range(&self, min: Score, max: Score) -> Option<(Score, &T)> {
        self.first_index_in_range(min, max).map(|idx| self.entry(idx))
    }

    pub(super) fn first_index_in_range(&self, min: Score, max: Score) -> Option<usize> {
        if !self.is_in_range(min, max) {
            return None;
        }

        let descent = self.descend(|_, _, next| next.score < min);

        // An inner range, so something follows the stop point
        let idx = self.successor(&descent)?;
        if self.node(idx).score > max {
            return None;
        }
        Some(idx)
    }

    /// Last element with a score in `[min, max]`
    pub fn last_in_range(&self, min: Score, max: Score) -> Option<(Score, &T)> {
        if !self.is_in_range(min, max) {
            return None;
        }

        let descent = self.descend(|_, _, next| next.score <= max);
        let idx = descent.prev[0]?;
        if self.node(idx).score < min {
            return None;
        }
        Some(self.entry(idx))
    }

    /// Iterate elements with a score in `[min, max]`, lowest first
    pub fn range(&self, min: Score, max: Score) -> Range<'_, T> {
        Range::new(self, self.first_index_in_range(min, max), max)
    }

    /// Delete every element with a score in `[min, max]`
    ///
    /// Returns the number of elements removed.
    pub fn delete_range_by_score(&mut self, min: Score, max: Score) -> usize {
        if min > max {
            return 0;
        }

        // Spans shift after every removal, so predecessors are found afresh
        // for each candidate rather than reused.
        let mut removed = 0;
        loop {
            let descent = self.descend(|_, _, next| next.score < min);
            match self.successor(&descent) {
                Some(idx) if self.node(idx).score <= max => {
                    self.delete_node(idx, &descent);
                    removed += 1;
                }
                _ => break,
            }
        }

        debug!("Deleted {} elements by score [{}, {}]", removed, min, max);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> SkipList<&'static str> {
        let mut list = SkipList::new(1);
        list.insert(2012, "jack");
        list.insert(2015, "tom");
        list.insert(2014, "mike");
        list
    }

    #[test]
    fn test_is_in_range() {
        let list = scenario();
        assert!(list.is_in_range(2012, 2012));
        assert!(list.is_in_range(2013, 2013));
        assert!(list.is_in_range(0, 2012));
        assert!(list.is_in_range(2015, u32::MAX));
        assert!(!list.is_in_range(0, 2011));
        assert!(!list.is_in_range(2016, 3000));
        assert!(!list.is_in_range(2015, 2012));
        assert!(!SkipList::<u32>::new(1).is_in_range(0, u32::MAX));
    }

    #[test]
    fn test_first_last_in_range() {
        let list = scenario();
        assert_eq!(list.first_in_range(2013, 2020), Some((2014, &"mike")));
        assert_eq!(list.last_in_range(2013, 2020), Some((2015, &"tom")));
        assert_eq!(list.first_in_range(0, 2012), Some((2012, &"jack")));
        assert_eq!(list.last_in_range(0, 2014), Some((2014, &"mike")));

        // bounds straddle the list but hold nothing
        assert_eq!(list.first_in_range(2013, 2013), None);
        assert_eq!(list.last_in_range(2013, 2013), None);
    }

    #[test]
    fn test_range_iter() {
        let mut list = SkipList::new(3);
        for i in 0..100u32 {
            list.insert(i, i * 10);
        }

        let results: Vec<_> = list.range(25, 35).collect();
        assert_eq!(results.len(), 11);
        assert_eq!(results[0], (25, &250));
        assert_eq!(results[10], (35, &350));

        assert_eq!(list.range(200, 300).count(), 0);
        assert_eq!(list.range(99, 99).count(), 1);
    }

    #[test]
    fn test_delete_range_by_score() {
        let mut list = scenario();
        assert_eq!(list.delete_range_by_score(2013, 2015), 2);
        list.verify().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first(), Some((2012, &"jack")));
        assert_eq!(list.last(), Some((2012, &"jack")));
    }

    #[test]
    fn test_delete_range_by_score_inclusive_bounds() {
        let mut list = SkipList::new(21);
        for i in 0..300u32 {
            list.insert(i / 3, i);
        }

        // 3 elements per score, both bounds included
        assert_eq!(list.delete_range_by_score(10, 19), 30);
        list.verify().unwrap();
        assert_eq!(list.len(), 270);
        assert_eq!(list.range(10, 19).count(), 0);
        assert_eq!(list.get_element_by_rank(31), Some((20, &60)));

        assert_eq!(list.delete_range_by_score(500, 600), 0);
        assert_eq!(list.delete_range_by_score(20, 10), 0);
        assert_eq!(list.delete_range_by_score(0, u32::MAX), 270);
        assert!(list.is_empty());
        list.verify().unwrap();
    }
}

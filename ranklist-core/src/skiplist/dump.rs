//! Diagnostics: invariant checking and a debug rendering

use super::list::SkipList;
use crate::{RankListError, Result};
use std::fmt;

fn corruption(msg: String) -> RankListError {
    RankListError::Corruption(msg)
}

impl<T: Ord> SkipList<T> {
    /// Walk the whole structure and check every link, span and
    /// back-reference. O(n * height); meant for tests and debugging.
    pub fn verify(&self) -> Result<()> {
        if self.level == 0 || self.level > self.head.len() {
            return Err(corruption(format!(
                "height {} outside [1, {}]",
                self.level,
                self.head.len()
            )));
        }

        // Level 0: order, back-references, heights, ranks
        let mut rank_of = vec![0usize; self.nodes.len()];
        let mut per_level = vec![0usize; self.level];
        let mut prev: Option<usize> = None;
        let mut rank = 0;
        let mut x = self.head[0].forward;

        while let Some(idx) = x {
            let node = self
                .nodes
                .get(idx)
                .and_then(Option::as_ref)
                .ok_or_else(|| corruption(format!("level 0 links to vacant slot {}", idx)))?;
            if rank_of[idx] != 0 {
                return Err(corruption(format!("level 0 cycles back to slot {}", idx)));
            }
            rank += 1;
            rank_of[idx] = rank;

            if node.height() == 0 || node.height() > self.level {
                return Err(corruption(format!(
                    "node at rank {} has height {} with list height {}",
                    rank,
                    node.height(),
                    self.level
                )));
            }
            per_level[..node.height()].iter_mut().for_each(|n| *n += 1);

            if node.backward != prev {
                return Err(corruption(format!(
                    "node at rank {} points back to {:?}, expected {:?}",
                    rank, node.backward, prev
                )));
            }
            if let Some(p) = prev {
                if !self.node(p).precedes(node.score, &node.value) {
                    return Err(corruption(format!("rank {} is out of order", rank)));
                }
            }

            prev = x;
            x = node.next();
        }

        if rank != self.len {
            return Err(corruption(format!(
                "level 0 holds {} nodes, count says {}",
                rank, self.len
            )));
        }
        if self.tail != prev {
            return Err(corruption(format!(
                "tail is {:?}, last node is {:?}",
                self.tail, prev
            )));
        }
        let live = self.nodes.iter().filter(|slot| slot.is_some()).count();
        if live != self.len {
            return Err(corruption(format!(
                "{} occupied slots for {} elements",
                live, self.len
            )));
        }

        // Every level: membership and spans
        for i in 0..self.level {
            let mut at = None;
            let mut at_rank = 0;
            let mut count = 0;
            loop {
                let link = self.links(at)[i];
                let Some(next) = link.forward else {
                    if link.span != self.len - at_rank {
                        return Err(corruption(format!(
                            "level {} final link from rank {} spans {}, expected {}",
                            i,
                            at_rank,
                            link.span,
                            self.len - at_rank
                        )));
                    }
                    break;
                };

                let next_rank = rank_of.get(next).copied().unwrap_or(0);
                if next_rank <= at_rank {
                    return Err(corruption(format!(
                        "level {} link from rank {} goes to slot {} not ahead on level 0",
                        i, at_rank, next
                    )));
                }
                if self.node(next).height() <= i {
                    return Err(corruption(format!(
                        "level {} links to rank {} of height {}",
                        i,
                        next_rank,
                        self.node(next).height()
                    )));
                }
                if link.span != next_rank - at_rank {
                    return Err(corruption(format!(
                        "level {} link from rank {} spans {}, expected {}",
                        i,
                        at_rank,
                        link.span,
                        next_rank - at_rank
                    )));
                }

                count += 1;
                at = Some(next);
                at_rank = next_rank;
            }

            if count != per_level[i] {
                return Err(corruption(format!(
                    "level {} chains {} nodes, {} nodes reach it",
                    i, count, per_level[i]
                )));
            }
        }

        if self.level > 1 && self.head[self.level - 1].forward.is_none() {
            return Err(corruption(format!("top level {} is empty", self.level - 1)));
        }

        Ok(())
    }
}

/// One row per node with its per-level spans; `|` marks a higher link
/// passing over the node. No format stability guarantee.
impl<T: fmt::Debug> fmt::Display for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24}", "<head>")?;
        for link in &self.head[..self.level] {
            write!(f, "[{:>3}] ", link.span)?;
        }
        writeln!(f)?;

        // Node each level is currently heading towards
        let mut reach: Vec<Option<usize>> =
            self.head[..self.level].iter().map(|l| l.forward).collect();

        let mut x = self.head[0].forward;
        while let Some(idx) = x {
            let node = self.node(idx);
            write!(f, "{:<24}", format!("<{:>10} {:?}>", node.score, node.value))?;
            for (i, target) in reach.iter_mut().enumerate() {
                if i < node.height() {
                    write!(f, "[{:>3}] ", node.levels[i].span)?;
                    *target = node.levels[i].forward;
                } else if target.is_some() {
                    write!(f, "  |   ")?;
                } else {
                    write!(f, "      ")?;
                }
            }
            writeln!(f)?;
            x = node.next();
        }

        write!(f, "{:<24}", "<end>")?;
        for _ in 0..self.level {
            write!(f, "  _   ")?;
        }
        writeln!(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(s, v)| (v, s))).finish()
    }
}

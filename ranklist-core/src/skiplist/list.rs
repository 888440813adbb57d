//! Skip list container, insert and delete

use super::level::LevelGenerator;
use super::node::{Link, Node};
use super::SkipListConfig;
use crate::config::MAX_LEVEL_LIMIT;
use crate::{NodeId, Result, Score};
use tracing::{debug, warn};

/// A rank-aware skip list
///
/// Nodes live in an arena and link to each other by slot index. The head
/// sentinel is stored apart from the arena as a bare link array sized to
/// `max_level`. Forward links form the only ownership path; back-references
/// are plain indices.
#[derive(Clone)]
pub struct SkipList<T> {
    pub(super) head: Vec<Link>,
    pub(super) nodes: Vec<Option<Node<T>>>,
    pub(super) free: Vec<usize>,
    pub(super) tail: Option<usize>,
    pub(super) level: usize,
    pub(super) len: usize,
    levels: LevelGenerator,
}

/// Result of a descent from the head: the last position visited at each
/// level before the stop point (`None` is the head) and that position's rank.
pub(super) struct Descent {
    pub prev: [Option<usize>; MAX_LEVEL_LIMIT],
    pub rank: [usize; MAX_LEVEL_LIMIT],
}

impl<T> SkipList<T> {
    /// Create an empty skip list with default shape and the given seed
    pub fn new(seed: u64) -> Self {
        Self::build(SkipListConfig::with_seed(seed))
    }

    /// Create an empty skip list from a configuration
    pub fn with_config(config: SkipListConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!("Rejected skip list configuration {:?}: {}", config, e);
            return Err(e);
        }
        Ok(Self::build(config))
    }

    fn build(config: SkipListConfig) -> Self {
        Self {
            head: vec![Link::default(); config.max_level],
            nodes: Vec::new(),
            free: Vec::new(),
            tail: None,
            level: 1,
            len: 0,
            levels: LevelGenerator::new(config.max_level, config.branching_factor, config.seed),
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of levels in use
    pub fn height(&self) -> usize {
        self.level
    }

    /// Maximum height any node may reach
    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }

    /// Resolve a handle returned by `insert`
    pub fn get(&self, id: NodeId) -> Option<(Score, &T)> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .map(|node| (node.score, &node.value))
    }

    /// Lowest element
    pub fn first(&self) -> Option<(Score, &T)> {
        self.head[0].forward.map(|idx| self.entry(idx))
    }

    /// Highest element
    pub fn last(&self) -> Option<(Score, &T)> {
        self.tail.map(|idx| self.entry(idx))
    }

    /// Remove every element. Height returns to 1; the level generator keeps
    /// its state.
    pub fn clear(&mut self) {
        self.head.iter_mut().for_each(|link| *link = Link::default());
        self.nodes.clear();
        self.free.clear();
        self.tail = None;
        self.level = 1;
        self.len = 0;
    }

    pub(super) fn node(&self, idx: usize) -> &Node<T> {
        self.nodes[idx]
            .as_ref()
            .expect("linked slot must be occupied")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.nodes[idx]
            .as_mut()
            .expect("linked slot must be occupied")
    }

    pub(super) fn entry(&self, idx: usize) -> (Score, &T) {
        let node = self.node(idx);
        (node.score, &node.value)
    }

    /// Link array of a position, `None` being the head
    pub(super) fn links(&self, at: Option<usize>) -> &[Link] {
        match at {
            None => &self.head,
            Some(idx) => &self.node(idx).levels,
        }
    }

    fn links_mut(&mut self, at: Option<usize>) -> &mut [Link] {
        match at {
            None => &mut self.head,
            Some(idx) => &mut self.node_mut(idx).levels,
        }
    }

    /// Descend from the top level to level 0, advancing along a level while
    /// `advance(traversed, span, next)` holds for the next node.
    pub(super) fn descend<F>(&self, mut advance: F) -> Descent
    where
        F: FnMut(usize, usize, &Node<T>) -> bool,
    {
        let mut descent = Descent {
            prev: [None; MAX_LEVEL_LIMIT],
            rank: [0; MAX_LEVEL_LIMIT],
        };
        let mut x = None;
        let mut traversed = 0;

        for i in (0..self.level).rev() {
            loop {
                let link = self.links(x)[i];
                match link.forward {
                    Some(next) if advance(traversed, link.span, self.node(next)) => {
                        traversed += link.span;
                        x = Some(next);
                    }
                    _ => break,
                }
            }
            descent.prev[i] = x;
            descent.rank[i] = traversed;
        }

        descent
    }

    /// Level-0 node right after the descent's stop point
    pub(super) fn successor(&self, descent: &Descent) -> Option<usize> {
        self.links(descent.prev[0])[0].forward
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let node = self.nodes[idx]
            .take()
            .expect("released slot must be occupied");
        self.free.push(idx);
        node
    }

    /// Splice `idx` out of every level. `descent` must hold the node's
    /// predecessors at all levels up to the current height.
    pub(super) fn delete_node(&mut self, idx: usize, descent: &Descent) -> Node<T> {
        let node = self.release(idx);

        for i in 0..self.level {
            let link = &mut self.links_mut(descent.prev[i])[i];
            if link.forward == Some(idx) {
                link.span = link.span + node.levels[i].span - 1;
                link.forward = node.levels[i].forward;
            } else {
                link.span -= 1;
            }
        }

        match node.next() {
            Some(next) => self.node_mut(next).backward = node.backward,
            None => self.tail = node.backward,
        }

        let before = self.level;
        while self.level > 1 && self.head[self.level - 1].forward.is_none() {
            self.level -= 1;
        }
        if self.level < before {
            debug!("Skip list height shrank from {} to {}", before, self.level);
        }

        self.len -= 1;
        node
    }
}

impl<T: Ord> SkipList<T> {
    /// Insert an element
    ///
    /// The caller guarantees `(score, value)` is not already present;
    /// equal scores are fine.
    pub fn insert(&mut self, score: Score, value: T) -> NodeId {
        let mut descent = self.descend(|_, _, next| next.precedes(score, &value));
        let level = self.levels.random_level();

        // New top levels route straight from the head
        if level > self.level {
            for i in self.level..level {
                descent.prev[i] = None;
                descent.rank[i] = 0;
                self.head[i].span = self.len;
            }
            debug!("Skip list height grew from {} to {}", self.level, level);
            self.level = level;
        }

        let idx = self.alloc(Node::new(score, value, level));
        let rank = descent.rank[0];

        for i in 0..level {
            let prev = self.links(descent.prev[i])[i];
            self.node_mut(idx).levels[i] = Link {
                forward: prev.forward,
                span: prev.span - (rank - descent.rank[i]),
            };
            self.links_mut(descent.prev[i])[i] = Link {
                forward: Some(idx),
                span: rank - descent.rank[i] + 1,
            };
        }

        // Levels above the new node now pass over one more element
        for i in level..self.level {
            self.links_mut(descent.prev[i])[i].span += 1;
        }

        self.node_mut(idx).backward = descent.prev[0];
        match self.node(idx).next() {
            Some(next) => self.node_mut(next).backward = Some(idx),
            None => self.tail = Some(idx),
        }

        self.len += 1;
        NodeId(idx)
    }

    /// Delete the element matching both score and identity
    ///
    /// Returns the removed payload, or `None` with no side effect when no
    /// element matches.
    pub fn delete(&mut self, score: Score, value: &T) -> Option<T> {
        let descent = self.descend(|_, _, next| next.precedes(score, value));
        let candidate = self.successor(&descent)?;

        // Equal scores may repeat; both score and identity must match
        if !self.node(candidate).matches(score, value) {
            return None;
        }
        Some(self.delete_node(candidate, &descent).value)
    }

    /// Check whether `(score, value)` is present
    pub fn contains(&self, score: Score, value: &T) -> bool {
        let descent = self.descend(|_, _, next| next.precedes(score, value));
        self.successor(&descent)
            .is_some_and(|idx| self.node(idx).matches(score, value))
    }

    /// Move an element to a new score
    ///
    /// Returns the new handle, or `None` with no side effect when
    /// `(score, value)` is not present.
    pub fn update_score(&mut self, score: Score, value: &T, new_score: Score) -> Option<NodeId> {
        let value = self.delete(score, value)?;
        Some(self.insert(new_score, value))
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEED)
    }
}

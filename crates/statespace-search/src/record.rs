use std::collections::{HashMap, HashSet};

use crate::path::Path;
use crate::traits::Vertex;

/// Bookkeeping for one breadth-first search.
///
/// Created fresh for every call and dropped when the call returns. The start
/// vertex is its own predecessor, which is how path reconstruction knows
/// where to stop.
pub(crate) struct SearchRecord<V> {
    pred: HashMap<V, V>,
    dist: HashMap<V, usize>,
    visited: HashSet<V>,
}

impl<V: Vertex> SearchRecord<V> {
    pub(crate) fn new(start: &V) -> Self {
        let mut record = Self {
            pred: HashMap::new(),
            dist: HashMap::new(),
            visited: HashSet::new(),
        };
        record.pred.insert(start.clone(), start.clone());
        record.dist.insert(start.clone(), 0);
        record.visited.insert(start.clone());
        record
    }

    #[inline]
    pub(crate) fn is_visited(&self, v: &V) -> bool {
        self.visited.contains(v)
    }

    /// Record that `v` was first reached from `from` at hop count `dist`.
    pub(crate) fn discover(&mut self, v: &V, from: &V, dist: usize) {
        self.pred.insert(v.clone(), from.clone());
        self.visited.insert(v.clone());
        self.dist.insert(v.clone(), dist);
    }

    pub(crate) fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Walk predecessor links back from `goal`.
    ///
    /// Returns an empty path if `goal` was never discovered.
    pub(crate) fn path_to(&self, goal: &V) -> Path<V> {
        if !self.visited.contains(goal) {
            return Path::empty();
        }
        let mut rev = vec![goal.clone()];
        let mut cur = goal;
        while let Some(prev) = self.pred.get(cur) {
            if prev == cur {
                break;
            }
            rev.push(prev.clone());
            cur = prev;
        }
        rev.reverse();
        Path::from_vec(rev)
    }

    pub(crate) fn into_distances(self) -> HashMap<V, usize> {
        self.dist
    }
}

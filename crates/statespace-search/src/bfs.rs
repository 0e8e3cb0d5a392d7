//! Bounded breadth-first search.
//!
//! One engine serves every [`Pather`]: explicit adjacency maps and
//! state spaces whose neighbors are generated on demand alike.

use std::collections::{HashMap, VecDeque};

use crate::config::SearchConfig;
use crate::error::{SearchError, VertexRole};
use crate::path::Path;
use crate::record::SearchRecord;
use crate::traits::Pather;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; the path is non-empty.
    Found,
    /// Every reachable vertex was explored without meeting the goal.
    Exhausted,
    /// A vertex beyond the hop budget was discovered before the goal.
    BudgetExceeded,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices discovered, the start included.
    pub visited: usize,
    /// Vertices taken off the queue and expanded.
    pub expanded: usize,
}

/// Full result of [`bfs_search`].
#[derive(Debug, Clone)]
pub struct SearchReport<V> {
    pub path: Path<V>,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Check that `v` is a vertex of `pather`.
fn ensure_known<P: Pather>(pather: &P, v: &P::Vertex, role: VertexRole) -> Result<(), SearchError> {
    if pather.contains(v) {
        Ok(())
    } else {
        Err(SearchError::UnknownVertex {
            role,
            vertex: format!("{v:?}"),
        })
    }
}

/// Find a shortest path from `start` to `goal`, reporting how the search ended.
///
/// Each step has cost 1. The search gives up as soon as it discovers a
/// vertex more than `config.max_dist` hops from `start`: breadth-first order
/// means no shorter route to the goal can still turn up.
///
/// Fails only when `start` or `goal` is not a vertex of `pather`. Not finding
/// the goal is reported through [`SearchOutcome`] and an empty path.
pub fn bfs_search<P: Pather>(
    pather: &P,
    start: &P::Vertex,
    goal: &P::Vertex,
    config: &SearchConfig,
) -> Result<SearchReport<P::Vertex>, SearchError> {
    ensure_known(pather, start, VertexRole::Start)?;
    ensure_known(pather, goal, VertexRole::Goal)?;

    log::debug!(
        "bfs: searching from {start:?} to {goal:?} within {} hops",
        config.max_dist
    );

    let mut record = SearchRecord::new(start);
    let mut stats = SearchStats::default();
    let mut queue: VecDeque<(P::Vertex, usize)> = VecDeque::new();
    queue.push_back((start.clone(), 0));

    let mut nbuf = Vec::new();

    let outcome = 'search: {
        if start == goal {
            break 'search SearchOutcome::Found;
        }

        while let Some((cur, cur_dist)) = queue.pop_front() {
            stats.expanded += 1;
            debug_assert!(
                stats.expanded <= record.visited_len(),
                "a vertex was dequeued twice"
            );

            nbuf.clear();
            pather.neighbors(&cur, &mut nbuf);

            for next in nbuf.drain(..) {
                if record.is_visited(&next) {
                    continue;
                }
                let nd = cur_dist + 1;
                record.discover(&next, &cur, nd);
                if nd > config.max_dist {
                    break 'search SearchOutcome::BudgetExceeded;
                }
                if next == *goal {
                    break 'search SearchOutcome::Found;
                }
                queue.push_back((next, nd));
            }
        }

        SearchOutcome::Exhausted
    };

    stats.visited = record.visited_len();

    let path = match outcome {
        SearchOutcome::Found => {
            let path = record.path_to(goal);
            log::debug!(
                "bfs: reached goal in {} steps ({} expanded, {} visited)",
                path.steps().unwrap_or(0),
                stats.expanded,
                stats.visited
            );
            path
        }
        SearchOutcome::BudgetExceeded => {
            log::warn!(
                "bfs: could not reach goal within {} steps (this may be expected if no path exists)",
                config.max_dist
            );
            Path::empty()
        }
        SearchOutcome::Exhausted => {
            log::warn!(
                "bfs: could not reach goal after visiting {} vertices (this may be expected if no path exists)",
                stats.visited
            );
            Path::empty()
        }
    };

    Ok(SearchReport {
        path,
        outcome,
        stats,
    })
}

/// Find a shortest path from `start` to `goal`.
///
/// Returns an empty path when the goal is unreachable or lies beyond the
/// hop budget. See [`bfs_search`] for the details.
pub fn bfs_path<P: Pather>(
    pather: &P,
    start: &P::Vertex,
    goal: &P::Vertex,
    config: &SearchConfig,
) -> Result<Path<P::Vertex>, SearchError> {
    bfs_search(pather, start, goal, config).map(|report| report.path)
}

/// Compute the hop distance from `start` to every vertex within
/// `config.max_dist` hops.
///
/// There is no goal, so the search never stops early: vertices exactly at
/// the budget are recorded but not expanded.
pub fn bfs_distances<P: Pather>(
    pather: &P,
    start: &P::Vertex,
    config: &SearchConfig,
) -> Result<HashMap<P::Vertex, usize>, SearchError> {
    ensure_known(pather, start, VertexRole::Start)?;

    let mut record = SearchRecord::new(start);
    let mut queue: VecDeque<(P::Vertex, usize)> = VecDeque::new();
    queue.push_back((start.clone(), 0));

    let mut nbuf = Vec::new();

    while let Some((cur, cur_dist)) = queue.pop_front() {
        let nd = cur_dist + 1;
        if nd > config.max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(&cur, &mut nbuf);

        for next in nbuf.drain(..) {
            if record.is_visited(&next) {
                continue;
            }
            record.discover(&next, &cur, nd);
            queue.push_back((next, nd));
        }
    }

    Ok(record.into_distances())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::traits::FnPather;

    /// Neighbors on the integer line segment `[0, len)`.
    fn line(len: i32) -> FnPather<i32, impl Fn(&i32, &mut Vec<i32>)> {
        FnPather::new(move |&n: &i32, buf: &mut Vec<i32>| {
            buf.extend([n - 1, n + 1].into_iter().filter(|m| (0..len).contains(m)));
        })
    }

    /// Adjacency-list graph over `0..n` with the vertex set as its domain.
    struct ListGraph {
        adj: Vec<Vec<usize>>,
    }

    impl Pather for ListGraph {
        type Vertex = usize;

        fn neighbors(&self, v: &usize, buf: &mut Vec<usize>) {
            buf.extend_from_slice(&self.adj[*v]);
        }

        fn contains(&self, v: &usize) -> bool {
            *v < self.adj.len()
        }
    }

    /// Floyd–Warshall all-pairs hop counts, independent of the engine.
    fn all_pairs(g: &ListGraph) -> Vec<Vec<Option<usize>>> {
        let n = g.adj.len();
        let mut d = vec![vec![None; n]; n];
        for (i, row) in d.iter_mut().enumerate() {
            row[i] = Some(0);
            for &j in &g.adj[i] {
                row[j] = Some(1);
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                        if d[i][j].is_none_or(|c| a + b < c) {
                            d[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }
        d
    }

    fn random_graph(rng: &mut StdRng, n: usize, edges: usize) -> ListGraph {
        let mut adj = vec![Vec::new(); n];
        for _ in 0..edges {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a != b && !adj[a].contains(&b) {
                adj[a].push(b);
                adj[b].push(a);
            }
        }
        ListGraph { adj }
    }

    #[test]
    fn start_equals_goal_is_a_single_vertex_path() {
        let report = bfs_search(&line(5), &3, &3, &SearchConfig::default()).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Found);
        assert_eq!(report.path.into_vec(), vec![3]);
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn finds_straight_line_path() {
        let path = bfs_path(&line(10), &1, &6, &SearchConfig::default()).unwrap();
        assert_eq!(path.into_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn exhausted_when_unreachable() {
        let g = ListGraph {
            adj: vec![vec![1], vec![0], vec![]],
        };
        let report = bfs_search(&g, &0, &2, &SearchConfig::default()).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert!(report.path.is_empty());
        assert_eq!(report.stats.visited, 2);
    }

    #[test]
    fn budget_exceeded_returns_empty_path() {
        let cfg = SearchConfig::default().with_max_dist(4);
        let report = bfs_search(&line(100), &0, &50, &cfg).unwrap();
        assert_eq!(report.outcome, SearchOutcome::BudgetExceeded);
        assert!(report.path.is_empty());

        // Exactly at the budget is still allowed.
        let path = bfs_path(&line(100), &0, &4, &cfg).unwrap();
        assert_eq!(path.steps(), Some(4));
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let g = ListGraph {
            adj: vec![vec![1], vec![0]],
        };
        let err = bfs_path(&g, &7, &0, &SearchConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SearchError::UnknownVertex {
                role: VertexRole::Start,
                ..
            }
        ));
        let err = bfs_path(&g, &0, &9, &SearchConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SearchError::UnknownVertex {
                role: VertexRole::Goal,
                vertex: "9".to_string(),
            }
        );
    }

    #[test]
    fn every_vertex_is_expanded_at_most_once() {
        // Count how often each vertex is asked for its neighbors.
        let seen = RefCell::new(HashSet::new());
        let twice = RefCell::new(false);
        let grid = FnPather::new(|&(r, c): &(i32, i32), buf: &mut Vec<(i32, i32)>| {
            if !seen.borrow_mut().insert((r, c)) {
                *twice.borrow_mut() = true;
            }
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nr, nc) = (r + dr, c + dc);
                if (0..8).contains(&nr) && (0..8).contains(&nc) {
                    buf.push((nr, nc));
                }
            }
        });
        let path = bfs_path(&grid, &(0, 0), &(7, 7), &SearchConfig::default()).unwrap();
        assert_eq!(path.steps(), Some(14));
        assert!(!*twice.borrow());
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let g = random_graph(&mut rng, 12, 14);
            let truth = all_pairs(&g);
            for s in 0..12 {
                for t in 0..12 {
                    let path = bfs_path(&g, &s, &t, &SearchConfig::default()).unwrap();
                    assert_eq!(path.steps(), truth[s][t], "from {s} to {t}");
                    if !path.is_empty() {
                        assert_eq!(path.start(), Some(&s));
                        assert_eq!(path.goal(), Some(&t));
                        assert!(path.is_connected_by(|a, b| g.adj[*a].contains(b)));
                    }
                }
            }
        }
    }

    #[test]
    fn distance_map_respects_budget() {
        let cfg = SearchConfig::default().with_max_dist(3);
        let dist = bfs_distances(&line(10), &5, &cfg).unwrap();
        let mut reached: Vec<_> = dist.into_iter().collect();
        reached.sort();
        assert_eq!(
            reached,
            vec![(2, 3), (3, 2), (4, 1), (5, 0), (6, 1), (7, 2), (8, 3)]
        );
    }

    #[test]
    fn distance_map_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(11);
        let g = random_graph(&mut rng, 15, 20);
        let truth = all_pairs(&g);
        let dist = bfs_distances(&g, &0, &SearchConfig::default()).unwrap();
        for (t, d) in truth[0].iter().enumerate() {
            assert_eq!(dist.get(&t).copied(), *d);
        }
    }
}

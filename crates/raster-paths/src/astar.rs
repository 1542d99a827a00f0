use std::cmp::Ordering;
use std::collections::BinaryHeap;

use raster_core::{Point, Range};

use crate::traits::AstarPather;

/// Sentinel best-cost meaning "not reached yet".
pub const UNREACHABLE: i64 = i64::MAX;

/// Frontier entry, ordered by `priority` for use in `BinaryHeap`.
///
/// `g` is the accumulated cost the entry was pushed with, so a stale entry
/// is recognised by comparing it against the best-cost table.
///
/// Equality follows the ordering, as `BinaryHeap` requires; the cell an
/// entry stands for is `pos`, and the search compares cells by `pos` only.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    pos: Point,
    g: i64,
    priority: f64,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other.priority.total_cmp(&self.priority)
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Terminal state of an A* search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped from the frontier. `path` runs from goal to start,
    /// both included.
    Found { path: Vec<Point>, expanded: usize },
    /// The frontier emptied before the goal was reached.
    Exhausted { expanded: usize },
}

impl SearchOutcome {
    /// Number of cells whose neighbours were relaxed.
    pub fn expanded(&self) -> usize {
        match self {
            SearchOutcome::Found { expanded, .. } | SearchOutcome::Exhausted { expanded } => {
                *expanded
            }
        }
    }
}

/// Run A* from `start` to `goal` inside `bounds`.
///
/// Working tables are allocated per call. Superseded frontier entries are
/// left in the queue and skipped when popped. `on_relax` is called with the
/// expanding cell each time one of its neighbours gets a better cost.
///
/// Both endpoints must lie inside `bounds`; otherwise the search is
/// immediately exhausted.
pub fn astar<P: AstarPather>(
    pather: &P,
    bounds: Range,
    start: Point,
    goal: Point,
    mut on_relax: impl FnMut(Point),
) -> SearchOutcome {
    let cols = bounds.cols().max(0) as usize;
    let idx = |p: Point| -> Option<usize> {
        if !bounds.contains(p) {
            return None;
        }
        Some((p.x - bounds.min.x) as usize * cols + (p.y - bounds.min.y) as usize)
    };

    let (Some(start_idx), Some(_)) = (idx(start), idx(goal)) else {
        return SearchOutcome::Exhausted { expanded: 0 };
    };

    let len = bounds.len();
    let mut best = vec![UNREACHABLE; len];
    let mut parent: Vec<Option<Point>> = vec![None; len];
    best[start_idx] = 0;

    let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
    open.push(Frontier {
        pos: start,
        g: 0,
        priority: pather.estimate(start, goal),
    });

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        if current.pos == goal {
            break 'search true;
        }

        let Some(ci) = idx(current.pos) else {
            continue;
        };

        // Skip stale entries.
        if current.g > best[ci] {
            log::trace!("discarding stale frontier entry {}", current.pos);
            continue;
        }

        expanded += 1;
        let current_g = best[ci];

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = idx(np) else {
                continue;
            };
            let tentative_g = current_g.saturating_add(pather.cost(current.pos, np));
            if tentative_g >= best[ni] {
                continue;
            }

            best[ni] = tentative_g;
            parent[ni] = Some(current.pos);
            on_relax(current.pos);

            open.push(Frontier {
                pos: np,
                g: tentative_g,
                priority: tentative_g as f64 + pather.estimate(np, goal),
            });
        }
    };

    if !found {
        return SearchOutcome::Exhausted { expanded };
    }

    // Reconstruct path, goal first.
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        let Some(prev) = idx(cur).and_then(|i| parent[i]) else {
            break;
        };
        path.push(prev);
        cur = prev;
    }
    SearchOutcome::Found { path, expanded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use crate::traits::{Pather, WeightedPather};

    /// Open 8-connected field where leaving any cell costs 1, except cells in
    /// `walls`, which are never entered.
    struct Field {
        bounds: Range,
        walls: Vec<Point>,
    }

    impl Pather for Field {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_8() {
                if self.bounds.contains(n) && !self.walls.contains(&n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Field {
        fn cost(&self, _from: Point, _to: Point) -> i64 {
            1
        }
    }

    impl AstarPather for Field {
        fn estimate(&self, from: Point, to: Point) -> f64 {
            f64::from(chebyshev(from, to))
        }
    }

    fn open_field(rows: i32, cols: i32) -> Field {
        Field {
            bounds: Range::with_size(rows, cols),
            walls: Vec::new(),
        }
    }

    #[test]
    fn straight_diagonal_path() {
        let f = open_field(5, 5);
        let out = astar(&f, f.bounds, Point::new(0, 0), Point::new(4, 4), |_| {});
        let SearchOutcome::Found { path, .. } = out else {
            panic!("expected a path");
        };
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Point::new(4, 4)));
        assert_eq!(path.last(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn start_equals_goal() {
        let f = open_field(3, 3);
        let p = Point::new(1, 2);
        let out = astar(&f, f.bounds, p, p, |_| panic!("nothing to relax"));
        assert_eq!(
            out,
            SearchOutcome::Found {
                path: vec![p],
                expanded: 0
            }
        );
    }

    #[test]
    fn walled_goal_is_exhausted() {
        let mut f = open_field(5, 5);
        let goal = Point::new(4, 4);
        f.walls = vec![Point::new(3, 3), Point::new(3, 4), Point::new(4, 3)];
        let out = astar(&f, f.bounds, Point::new(0, 0), goal, |_| {});
        assert!(matches!(out, SearchOutcome::Exhausted { .. }));
        // Every open cell other than the goal was expanded once.
        assert_eq!(out.expanded(), 25 - 3 - 1);
    }

    #[test]
    fn detour_around_wall() {
        let mut f = open_field(5, 5);
        f.walls = (0..4).map(|y| Point::new(2, y)).collect();
        let out = astar(&f, f.bounds, Point::new(0, 0), Point::new(4, 0), |_| {});
        let SearchOutcome::Found { path, .. } = out else {
            panic!("expected a path");
        };
        assert!(path.contains(&Point::new(2, 4)));
        for w in path.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1);
        }
    }

    #[test]
    fn on_relax_sees_expanded_cells() {
        let f = open_field(4, 4);
        let mut seen = Vec::new();
        astar(&f, f.bounds, Point::new(0, 0), Point::new(3, 3), |p| seen.push(p));
        assert_eq!(seen.first(), Some(&Point::new(0, 0)));
        assert!(!seen.contains(&Point::new(3, 3)));
    }

    #[test]
    fn endpoint_outside_bounds_is_exhausted() {
        let f = open_field(3, 3);
        let out = astar(&f, f.bounds, Point::new(0, 0), Point::new(3, 0), |_| {});
        assert_eq!(out, SearchOutcome::Exhausted { expanded: 0 });
    }

    #[test]
    fn frontier_pops_lowest_priority() {
        let mut heap = BinaryHeap::new();
        for (i, pr) in [3.5, 1.0, 2.25].into_iter().enumerate() {
            heap.push(Frontier {
                pos: Point::new(i as i32, 0),
                g: 0,
                priority: pr,
            });
        }
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|f| f.priority)).collect();
        assert_eq!(order, vec![1.0, 2.25, 3.5]);
    }
}

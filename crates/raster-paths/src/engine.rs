//! The raster search engine.
//!
//! An [`AstarEngine`] owns an immutable cost grid and answers shortest-path
//! requests over it. Moving out of a cell costs that cell's value, in any of
//! the 8 directions. Besides the path itself the engine keeps two pieces of
//! instance state: optional auxiliary rasters that accumulate visitation and
//! path markings, and the diagonal-move count of the most recent request.
//!
//! The engine is not meant to be shared between threads while searching;
//! every request takes `&mut self`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raster_core::{Grid, Point};

use crate::analysis::PathAnalysis;
use crate::astar::{SearchOutcome, astar};
use crate::config::EngineConfig;
use crate::error::{BuildError, Endpoint, SearchError};
use crate::heuristic::{Estimator, GridStats, Heuristic};
use crate::neighbors::NeighborBound;
use crate::raster::PathRaster;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Single-element cost sequence value returned when no path exists.
pub const NO_PATH: i32 = i32::MAX;

/// A found path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Cells from goal to start, both included.
    pub cells: Vec<Point>,
    /// Cost of each cell in `cells`, in the same order.
    pub costs: Vec<i32>,
    /// Number of steps that change both row and column.
    pub diagonals: usize,
    /// Number of cells expanded while searching.
    pub expanded: usize,
}

impl Route {
    /// Sum of the cell costs along the path.
    pub fn total_cost(&self) -> i64 {
        self.costs.iter().map(|&c| i64::from(c)).sum()
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the route holds no cells. A found route always holds its goal.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Statistics over the cell costs of this route.
    pub fn analysis(&self) -> Option<PathAnalysis> {
        PathAnalysis::of_path(&self.costs, self.diagonals)
    }
}

/// Cost-grid view used to drive the search.
struct RasterPather<'a> {
    grid: &'a Grid<i32>,
    bound: NeighborBound,
    impassable: Option<i32>,
    estimator: Estimator,
}

impl Pather for RasterPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let grid = self.grid;
        let impassable = self.impassable;
        self.bound.neighbors(
            grid.bounds(),
            p,
            |n| impassable.is_none() || grid.at(n) != impassable,
            buf,
        );
    }
}

impl WeightedPather for RasterPather<'_> {
    fn cost(&self, from: Point, _to: Point) -> i64 {
        self.grid.at(from).map_or(0, i64::from)
    }
}

impl AstarPather for RasterPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.estimator.estimate(from, to)
    }
}

/// A* shortest-path engine over a dense integer cost raster.
pub struct AstarEngine<R: Rng = StdRng> {
    grid: Grid<i32>,
    stats: GridStats,
    config: EngineConfig,
    estimator: Estimator,
    rasters: Option<PathRaster>,
    diagonals: usize,
    rng: R,
}

impl AstarEngine<StdRng> {
    /// Create an engine whose path colours come from an OS-seeded generator.
    pub fn new(grid: Grid<i32>, stats: GridStats, config: EngineConfig) -> Result<Self, BuildError> {
        Self::with_rng(grid, stats, config, StdRng::from_os_rng())
    }

    /// Create an engine from nested rows, a heuristic mode index, the grid's
    /// minimum and mean cost, and whether to keep three-channel rasters.
    pub fn from_rows(
        rows: Vec<Vec<i32>>,
        heuristic: u8,
        min_cost: f64,
        mean_cost: f64,
        enable_rasters: bool,
    ) -> Result<Self, BuildError> {
        let grid = Grid::from_rows(rows)?;
        let mut config = EngineConfig::default().with_heuristic(Heuristic::try_from(heuristic)?);
        if enable_rasters {
            config = config.with_rasters(Default::default());
        }
        Self::new(grid, GridStats::new(min_cost, mean_cost), config)
    }
}

impl<R: Rng> AstarEngine<R> {
    /// Create an engine drawing path colours from `rng`.
    ///
    /// Fails on an empty grid, negative cell costs (other than the
    /// configured impassable value) or invalid statistics.
    pub fn with_rng(
        grid: Grid<i32>,
        stats: GridStats,
        config: EngineConfig,
        rng: R,
    ) -> Result<Self, BuildError> {
        if grid.is_empty() {
            return Err(raster_core::GridError::Empty.into());
        }
        if let Some((pos, cost)) = grid
            .iter()
            .find(|&(_, c)| c < 0 && Some(c) != config.impassable)
        {
            return Err(BuildError::NegativeCost { pos, cost });
        }
        let stats = stats.validate()?;

        if config.neighbor_bound == NeighborBound::ExcludeOrigin {
            log::warn!("row 0 and column 0 will never be relaxed as neighbours");
        }
        if !config.heuristic.is_admissible() {
            log::debug!(
                "heuristic mode {} may return suboptimal paths",
                config.heuristic.index()
            );
        }

        let rasters = config
            .rasters
            .map(|layout| PathRaster::new(grid.rows(), grid.cols(), layout));

        Ok(Self {
            estimator: Estimator::new(config.heuristic, stats, config.precision),
            grid,
            stats,
            config,
            rasters,
            diagonals: 0,
            rng,
        })
    }

    /// The cost grid.
    pub fn grid(&self) -> &Grid<i32> {
        &self.grid
    }

    /// The statistics the engine was built with.
    pub fn stats(&self) -> GridStats {
        self.stats
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The heuristic mode selected at construction.
    pub fn heuristic(&self) -> Heuristic {
        self.config.heuristic
    }

    /// The heuristic bound to this engine's statistics.
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Diagonal moves on the path of the most recent request.
    pub fn diagonals(&self) -> usize {
        self.diagonals
    }

    /// The auxiliary rasters, if enabled.
    pub fn rasters(&self) -> Option<&PathRaster> {
        self.rasters.as_ref()
    }

    /// One auxiliary raster channel.
    pub fn raster(&self, channel: usize) -> Result<&Grid<u8>, SearchError> {
        let rasters = self.rasters.as_ref().ok_or(SearchError::RastersDisabled)?;
        rasters.channel(channel).ok_or(SearchError::InvalidChannel {
            channel,
            available: rasters.channel_count(),
        })
    }

    /// One auxiliary raster channel, copied out as nested rows.
    pub fn raster_rows(&self, channel: usize) -> Result<Vec<Vec<u8>>, SearchError> {
        self.raster(channel).map(Grid::to_rows)
    }

    /// Clear all auxiliary raster markings. No-op when rasters are disabled.
    pub fn reset_rasters(&mut self) {
        if let Some(r) = self.rasters.as_mut() {
            r.reset();
        }
    }

    /// Shortest path from `start` to `goal`.
    ///
    /// Returns the per-cell costs from goal to start, or `None` if the goal
    /// cannot be reached.
    pub fn shortest_path(
        &mut self,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<i32>>, SearchError> {
        Ok(self.route(start, goal)?.map(|r| r.costs))
    }

    /// Like [`shortest_path`](Self::shortest_path), but reports an unreachable
    /// goal as the single-element sequence `[NO_PATH]`.
    pub fn shortest_path_or_sentinel(
        &mut self,
        start: Point,
        goal: Point,
    ) -> Result<Vec<i32>, SearchError> {
        Ok(self.shortest_path(start, goal)?.unwrap_or_else(|| vec![NO_PATH]))
    }

    /// Shortest path from `start` to `goal`, with its cells and statistics.
    ///
    /// Resets the diagonal count, draws this request's path colour, and on
    /// success blends that colour into every path cell of the rasters.
    pub fn route(&mut self, start: Point, goal: Point) -> Result<Option<Route>, SearchError> {
        self.diagonals = 0;
        self.check_bounds(Endpoint::Start, start)?;
        self.check_bounds(Endpoint::Goal, goal)?;

        let color = self.draw_color();

        let pather = RasterPather {
            grid: &self.grid,
            bound: self.config.neighbor_bound,
            impassable: self.config.impassable,
            estimator: self.estimator,
        };
        let rasters = &mut self.rasters;
        let outcome = astar(&pather, self.grid.bounds(), start, goal, |p| {
            if let Some(r) = rasters.as_mut() {
                r.mark_visited(p);
            }
        });

        let (cells, expanded) = match outcome {
            SearchOutcome::Found { path, expanded } => (path, expanded),
            SearchOutcome::Exhausted { expanded } => {
                log::debug!("no path from {start} to {goal} ({expanded} cells expanded)");
                return Ok(None);
            }
        };

        let mut costs = Vec::with_capacity(cells.len());
        for (i, &p) in cells.iter().enumerate() {
            costs.push(self.grid.at(p).unwrap_or_default());
            if let Some(r) = self.rasters.as_mut() {
                r.blend(p, &color);
            }
            if cells.get(i + 1).is_some_and(|&prev| prev.is_diagonal_to(p)) {
                self.diagonals += 1;
            }
        }

        log::debug!(
            "path from {start} to {goal}: {} cells, {} diagonals, {expanded} cells expanded",
            cells.len(),
            self.diagonals
        );

        Ok(Some(Route {
            cells,
            costs,
            diagonals: self.diagonals,
            expanded,
        }))
    }

    fn check_bounds(&self, which: Endpoint, pos: Point) -> Result<(), SearchError> {
        if self.grid.contains(pos) {
            return Ok(());
        }
        Err(SearchError::OutOfBounds {
            which,
            pos,
            bounds: self.grid.bounds(),
        })
    }

    /// One random intensity per raster channel; empty without rasters.
    fn draw_color(&mut self) -> Vec<u8> {
        let n = self.rasters.as_ref().map_or(0, PathRaster::channel_count);
        (0..n).map(|_| self.rng.random::<u8>()).collect()
    }
}

use std::fmt;

use raster_core::{GridError, Point, Range};

/// Errors raised while building an engine. Nothing is searched until the
/// grid, statistics and heuristic mode have all been accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// The cost grid is empty or not rectangular.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A cell carries a negative traversal cost.
    #[error("negative cost {cost} at {pos}")]
    NegativeCost { pos: Point, cost: i32 },
    /// The heuristic mode index is outside `0..=5`.
    #[error("heuristic mode {0} is not in 0..=5")]
    InvalidHeuristic(u8),
    /// A caller-supplied statistic is negative or not finite.
    #[error("{name} cost statistic must be finite and non-negative, got {value}")]
    InvalidStatistic { name: &'static str, value: f64 },
}

/// Which end of a path request a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised by engine queries. Reported before any search work begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A path endpoint lies outside the grid.
    #[error("{which} {pos} is outside the grid {bounds}")]
    OutOfBounds {
        which: Endpoint,
        pos: Point,
        bounds: Range,
    },
    /// The requested auxiliary raster channel does not exist.
    #[error("raster channel {channel} does not exist ({available} available)")]
    InvalidChannel { channel: usize, available: usize },
    /// The engine was built without auxiliary rasters.
    #[error("auxiliary rasters are disabled for this engine")]
    RastersDisabled,
}

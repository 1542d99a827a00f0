//! Weighted A* shortest paths over dense integer cost rasters.
//!
//! Moving from a cell to any of its 8 neighbours costs the value of the cell
//! being left. [`AstarEngine`] owns a cost grid and answers path requests
//! with the per-cell costs along the best path found, from goal to start.
//!
//! - **Heuristics**: six Chebyshev-based estimates scaled by the grid's
//!   minimum or mean cost ([`Heuristic`]). Only mode 0 guarantees optimality.
//! - **Auxiliary rasters**: optional visualization channels that record
//!   expanded cells and colour each found path ([`PathRaster`]).
//! - **Diagonal count**: diagonal steps on the most recent path
//!   ([`AstarEngine::diagonals`]).
//! - **Path analysis**: sums, climbs and metric lengths over a cost sequence
//!   ([`PathAnalysis`]).
//!
//! The search itself is available for any map through [`astar`] and the
//! pather traits.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbours |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | remaining-cost estimate |

mod analysis;
mod astar;
mod config;
mod distance;
mod engine;
mod error;
mod heuristic;
mod neighbors;
mod raster;
mod traits;

pub use analysis::{Analysis, PathAnalysis, UnknownAnalysis};
pub use astar::{SearchOutcome, UNREACHABLE, astar};
pub use config::{EngineConfig, RasterChannels};
pub use distance::chebyshev;
pub use engine::{AstarEngine, NO_PATH, Route};
pub use error::{BuildError, Endpoint, SearchError};
pub use heuristic::{Estimator, GridStats, Heuristic, Precision};
pub use neighbors::NeighborBound;
pub use raster::{PathRaster, VISITED};
pub use traits::{AstarPather, Pather, WeightedPather};

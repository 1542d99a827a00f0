//! **raster-core** — geometry and dense grid types for cost rasters.
//!
//! This crate provides the foundational types shared by the pathfinding
//! crate: cell coordinates, half-open rectangles and a row-major grid.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError};

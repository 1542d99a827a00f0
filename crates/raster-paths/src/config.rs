use crate::heuristic::{Heuristic, Precision};
use crate::neighbors::NeighborBound;

/// Layout of the auxiliary visualization rasters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RasterChannels {
    /// A single intensity channel.
    Mono,
    /// Three colour-like channels.
    #[default]
    Rgb,
}

impl RasterChannels {
    /// Number of channel matrices.
    pub fn count(self) -> usize {
        match self {
            RasterChannels::Mono => 1,
            RasterChannels::Rgb => 3,
        }
    }
}

/// Configuration for creating an [`AstarEngine`](crate::AstarEngine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub heuristic: Heuristic,
    pub precision: Precision,
    pub neighbor_bound: NeighborBound,
    /// Allocate auxiliary rasters with this layout; `None` disables them.
    pub rasters: Option<RasterChannels>,
    /// Cost value marking cells that can never be entered (raster nodata).
    pub impassable: Option<i32>,
}

impl EngineConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_neighbor_bound(mut self, bound: NeighborBound) -> Self {
        self.neighbor_bound = bound;
        self
    }

    pub fn with_rasters(mut self, channels: RasterChannels) -> Self {
        self.rasters = Some(channels);
        self
    }

    pub fn with_impassable(mut self, cost: i32) -> Self {
        self.impassable = Some(cost);
        self
    }
}

//! Auxiliary visualization rasters.
//!
//! A [`PathRaster`] records which cells a search expanded and which cells
//! ended up on a path. It never influences the search itself. Markings
//! accumulate across searches until [`PathRaster::reset`] is called.

use raster_core::{Grid, Point};

use crate::config::RasterChannels;

/// Intensity written on every channel of an expanded cell.
pub const VISITED: u8 = 255;

/// One or more same-sized intensity channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRaster {
    channels: Vec<Grid<u8>>,
}

impl PathRaster {
    /// Allocate zeroed channels of the given size.
    pub fn new(rows: usize, cols: usize, layout: RasterChannels) -> Self {
        Self {
            channels: (0..layout.count()).map(|_| Grid::new(rows, cols)).collect(),
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// The channel matrix at `index`, if it exists.
    pub fn channel(&self, index: usize) -> Option<&Grid<u8>> {
        self.channels.get(index)
    }

    /// Whether any channel of `p` holds a non-zero intensity.
    pub fn is_marked(&self, p: Point) -> bool {
        self.channels.iter().any(|c| c.at(p).is_some_and(|v| v != 0))
    }

    /// Mark `p` as expanded, unless it already carries a marking.
    pub fn mark_visited(&mut self, p: Point) {
        if self.is_marked(p) {
            return;
        }
        for c in &mut self.channels {
            c.set(p, VISITED);
        }
    }

    /// Average `color` into the channels at `p`, one value per channel.
    ///
    /// Blended values never drop below 1, so a path cell always stays
    /// marked and is not later overwritten with [`VISITED`].
    pub fn blend(&mut self, p: Point, color: &[u8]) {
        for (c, &v) in self.channels.iter_mut().zip(color) {
            if let Some(old) = c.at(p) {
                let avg = (u16::from(old) + u16::from(v)) / 2;
                c.set(p, avg.max(1) as u8);
            }
        }
    }

    /// Clear every channel back to zero.
    pub fn reset(&mut self) {
        for c in &mut self.channels {
            c.fill(0);
        }
    }
}

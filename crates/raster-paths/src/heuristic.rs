//! Heuristic selection.
//!
//! Every heuristic is the Chebyshev distance scaled by a per-step factor
//! derived from the raster's statistics. Only [`Heuristic::MinCost`] is
//! admissible; the mean-based modes trade optimality for fewer expansions.

use raster_core::Point;

use crate::distance::chebyshev;
use crate::error::BuildError;

/// Caller-supplied raster statistics.
///
/// The engine trusts these values and never recomputes them from the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridStats {
    /// Smallest cell cost in the raster.
    pub min: f64,
    /// Mean cell cost of the raster.
    pub mean: f64,
}

impl GridStats {
    pub fn new(min: f64, mean: f64) -> Self {
        Self { min, mean }
    }

    /// Reject negative or non-finite statistics.
    pub fn validate(self) -> Result<Self, BuildError> {
        for (name, value) in [("min", self.min), ("mean", self.mean)] {
            if !value.is_finite() || value < 0.0 {
                return Err(BuildError::InvalidStatistic { name, value });
            }
        }
        Ok(self)
    }
}

/// Heuristic mode, selected by its index `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Minimum cell cost per step (mode 0). Admissible.
    #[default]
    MinCost,
    /// Mean cost / 4 per step (mode 1).
    QuarterMean,
    /// Mean cost / 2 per step (mode 2).
    HalfMean,
    /// Mean cost / 1.5 per step (mode 3).
    TwoThirdsMean,
    /// Mean cost / 1.25 per step (mode 4).
    FourFifthsMean,
    /// Mean cost per step (mode 5).
    Mean,
}

impl Heuristic {
    /// All modes in index order.
    pub const ALL: [Heuristic; 6] = [
        Heuristic::MinCost,
        Heuristic::QuarterMean,
        Heuristic::HalfMean,
        Heuristic::TwoThirdsMean,
        Heuristic::FourFifthsMean,
        Heuristic::Mean,
    ];

    /// The mode index of this heuristic.
    pub fn index(self) -> u8 {
        match self {
            Heuristic::MinCost => 0,
            Heuristic::QuarterMean => 1,
            Heuristic::HalfMean => 2,
            Heuristic::TwoThirdsMean => 3,
            Heuristic::FourFifthsMean => 4,
            Heuristic::Mean => 5,
        }
    }

    /// Whether the heuristic never overestimates, given accurate statistics.
    pub fn is_admissible(self) -> bool {
        self == Heuristic::MinCost
    }

    /// Per-step scale factor before any precision truncation.
    pub fn factor(self, stats: GridStats) -> f64 {
        match self {
            Heuristic::MinCost => stats.min,
            Heuristic::QuarterMean => stats.mean / 4.0,
            Heuristic::HalfMean => stats.mean / 2.0,
            Heuristic::TwoThirdsMean => stats.mean / 1.5,
            Heuristic::FourFifthsMean => stats.mean / 1.25,
            Heuristic::Mean => stats.mean,
        }
    }
}

impl TryFrom<u8> for Heuristic {
    type Error = BuildError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Heuristic::ALL
            .get(index as usize)
            .copied()
            .ok_or(BuildError::InvalidHeuristic(index))
    }
}

/// Numeric precision of the per-step factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Keep the factor as a float.
    #[default]
    Float,
    /// Truncate the factor toward zero.
    Integer,
}

/// A heuristic bound to concrete statistics, ready to estimate distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    heuristic: Heuristic,
    factor: f64,
}

impl Estimator {
    pub fn new(heuristic: Heuristic, stats: GridStats, precision: Precision) -> Self {
        let raw = heuristic.factor(stats);
        let factor = match precision {
            Precision::Float => raw,
            Precision::Integer => raw.trunc(),
        };
        Self { heuristic, factor }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The per-step scale factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(chebyshev(from, to)) * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> GridStats {
        GridStats::new(2.0, 10.0)
    }

    #[test]
    fn index_round_trip() {
        for (i, h) in Heuristic::ALL.iter().enumerate() {
            assert_eq!(h.index() as usize, i);
            assert_eq!(Heuristic::try_from(i as u8).unwrap(), *h);
        }
    }

    #[test]
    fn index_out_of_range_is_rejected() {
        assert_eq!(Heuristic::try_from(6), Err(BuildError::InvalidHeuristic(6)));
        assert_eq!(Heuristic::try_from(255), Err(BuildError::InvalidHeuristic(255)));
    }

    #[test]
    fn factor_table() {
        let s = stats();
        assert_eq!(Heuristic::MinCost.factor(s), 2.0);
        assert_eq!(Heuristic::QuarterMean.factor(s), 2.5);
        assert_eq!(Heuristic::HalfMean.factor(s), 5.0);
        assert!((Heuristic::TwoThirdsMean.factor(s) - 10.0 / 1.5).abs() < 1e-12);
        assert_eq!(Heuristic::FourFifthsMean.factor(s), 8.0);
        assert_eq!(Heuristic::Mean.factor(s), 10.0);
    }

    #[test]
    fn only_min_cost_is_admissible() {
        assert!(Heuristic::MinCost.is_admissible());
        assert!(Heuristic::ALL[1..].iter().all(|h| !h.is_admissible()));
    }

    #[test]
    fn estimate_is_scaled_chebyshev() {
        let e = Estimator::new(Heuristic::QuarterMean, stats(), Precision::Float);
        assert_eq!(e.estimate(Point::new(0, 0), Point::new(4, 1)), 10.0);
        assert_eq!(e.estimate(Point::new(3, 3), Point::new(3, 3)), 0.0);
    }

    #[test]
    fn integer_precision_truncates_factor() {
        let e = Estimator::new(Heuristic::QuarterMean, stats(), Precision::Integer);
        assert_eq!(e.factor(), 2.0);
        let e = Estimator::new(Heuristic::TwoThirdsMean, stats(), Precision::Integer);
        assert_eq!(e.factor(), 6.0);
        assert_eq!(e.estimate(Point::new(0, 0), Point::new(2, 2)), 12.0);
    }

    #[test]
    fn stats_validation() {
        assert!(GridStats::new(0.0, 0.0).validate().is_ok());
        assert!(matches!(
            GridStats::new(-1.0, 3.0).validate(),
            Err(BuildError::InvalidStatistic { name: "min", .. })
        ));
        assert!(matches!(
            GridStats::new(1.0, f64::NAN).validate(),
            Err(BuildError::InvalidStatistic { name: "mean", .. })
        ));
    }
}

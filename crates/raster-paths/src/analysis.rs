//! Statistics over the cell costs of a path.
//!
//! Cost functions built on top of the engine rarely want the raw cost
//! sequence; they want one number per edge (a sum, a climb, a length).
//! [`PathAnalysis`] computes those numbers, and [`Analysis`] names them so a
//! measure can be selected from text.

use std::fmt;
use std::str::FromStr;

use crate::engine::NO_PATH;

/// A named measure over a path's cost sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Analysis {
    Sum,
    Mean,
    Median,
    Min,
    Max,
    Variance,
    StdDev,
    GradientSum,
    GradientMin,
    GradientMax,
    Ascent,
    Descent,
    TotalClimb,
}

impl Analysis {
    pub const ALL: [Analysis; 13] = [
        Analysis::Sum,
        Analysis::Mean,
        Analysis::Median,
        Analysis::Min,
        Analysis::Max,
        Analysis::Variance,
        Analysis::StdDev,
        Analysis::GradientSum,
        Analysis::GradientMin,
        Analysis::GradientMax,
        Analysis::Ascent,
        Analysis::Descent,
        Analysis::TotalClimb,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Analysis::Sum => "sum",
            Analysis::Mean => "mean",
            Analysis::Median => "median",
            Analysis::Min => "min",
            Analysis::Max => "max",
            Analysis::Variance => "variance",
            Analysis::StdDev => "standdev",
            Analysis::GradientSum => "gradientsum",
            Analysis::GradientMin => "gradientmin",
            Analysis::GradientMax => "gradientmax",
            Analysis::Ascent => "ascent",
            Analysis::Descent => "descent",
            Analysis::TotalClimb => "totalclimb",
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Analysis`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path analysis \u{201c}{0}\u{201d}")]
pub struct UnknownAnalysis(pub String);

impl FromStr for Analysis {
    type Err = UnknownAnalysis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "stddev" {
            return Ok(Analysis::StdDev);
        }
        Analysis::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| UnknownAnalysis(s.to_string()))
    }
}

/// Statistics over a non-empty cost sequence and its diagonal-move count.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnalysis {
    costs: Vec<i32>,
    diagonals: usize,
}

impl PathAnalysis {
    /// Returns `None` for an empty sequence or the no-path sentinel.
    pub fn new(costs: &[i32], diagonals: usize) -> Option<Self> {
        if costs == [NO_PATH] {
            return None;
        }
        Self::of_path(costs, diagonals)
    }

    /// Analysis of a path known to exist. A lone `NO_PATH` cost is a real
    /// cell here, not the sentinel.
    pub(crate) fn of_path(costs: &[i32], diagonals: usize) -> Option<Self> {
        if costs.is_empty() {
            return None;
        }
        Some(Self {
            costs: costs.to_vec(),
            diagonals,
        })
    }

    pub fn costs(&self) -> &[i32] {
        &self.costs
    }

    pub fn diagonals(&self) -> usize {
        self.diagonals
    }

    /// Evaluate a named measure.
    pub fn measure(&self, analysis: Analysis) -> f64 {
        match analysis {
            Analysis::Sum => self.sum() as f64,
            Analysis::Mean => self.mean(),
            Analysis::Median => self.median(),
            Analysis::Min => f64::from(self.min()),
            Analysis::Max => f64::from(self.max()),
            Analysis::Variance => self.variance(),
            Analysis::StdDev => self.std_dev(),
            Analysis::GradientSum => self.gradient_sum(),
            Analysis::GradientMin => self.gradient_min(),
            Analysis::GradientMax => self.gradient_max(),
            Analysis::Ascent => self.ascent() as f64,
            Analysis::Descent => self.descent() as f64,
            Analysis::TotalClimb => self.total_climb() as f64,
        }
    }

    pub fn sum(&self) -> i64 {
        self.costs.iter().map(|&c| i64::from(c)).sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() as f64 / self.costs.len() as f64
    }

    /// Middle value; the mean of the two middle values for even lengths.
    pub fn median(&self) -> f64 {
        let mut sorted = self.costs.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            f64::from(sorted[mid])
        } else {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        }
    }

    pub fn min(&self) -> i32 {
        self.costs.iter().copied().min().unwrap_or_default()
    }

    pub fn max(&self) -> i32 {
        self.costs.iter().copied().max().unwrap_or_default()
    }

    /// Sample variance (n - 1 denominator). Zero for a single cost.
    pub fn variance(&self) -> f64 {
        let n = self.costs.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let ss: f64 = self
            .costs
            .iter()
            .map(|&c| {
                let d = f64::from(c) - mean;
                d * d
            })
            .sum();
        ss / (n - 1) as f64
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Discrete gradient: central differences inside, one-sided differences
    /// at both ends. A single cost has gradient `[0.0]`.
    pub fn gradient(&self) -> Vec<f64> {
        let f: Vec<f64> = self.costs.iter().map(|&c| f64::from(c)).collect();
        let n = f.len();
        if n < 2 {
            return vec![0.0; n];
        }
        let mut g = Vec::with_capacity(n);
        g.push(f[1] - f[0]);
        for i in 1..n - 1 {
            g.push((f[i + 1] - f[i - 1]) / 2.0);
        }
        g.push(f[n - 1] - f[n - 2]);
        g
    }

    pub fn gradient_sum(&self) -> f64 {
        self.gradient().iter().sum()
    }

    pub fn gradient_min(&self) -> f64 {
        self.gradient().into_iter().fold(f64::INFINITY, f64::min)
    }

    pub fn gradient_max(&self) -> f64 {
        self.gradient().into_iter().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sum of increases between consecutive costs.
    pub fn ascent(&self) -> i64 {
        self.steps().filter(|&d| d > 0).sum()
    }

    /// Sum of decreases between consecutive costs, as a positive number.
    pub fn descent(&self) -> i64 {
        -self.steps().filter(|&d| d < 0).sum::<i64>()
    }

    /// Sum of absolute changes between consecutive costs.
    pub fn total_climb(&self) -> i64 {
        self.steps().map(i64::abs).sum()
    }

    /// Ground length of the path for cells `spacing` units apart: diagonal
    /// steps count √2 × spacing, the rest count `spacing`.
    pub fn metric_length(&self, spacing: f64) -> f64 {
        let steps = self.costs.len() - 1;
        let diagonals = self.diagonals.min(steps);
        let straight = steps - diagonals;
        diagonals as f64 * spacing * std::f64::consts::SQRT_2 + straight as f64 * spacing
    }

    fn steps(&self) -> impl Iterator<Item = i64> + '_ {
        self.costs
            .windows(2)
            .map(|w| i64::from(w[1]) - i64::from(w[0]))
    }
}

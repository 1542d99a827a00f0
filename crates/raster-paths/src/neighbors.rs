use raster_core::{Point, Range};

/// Lower bound applied to neighbour coordinates during relaxation.
///
/// Older outputs of this search tested `x > 0 && y > 0`, which never relaxes
/// a cell in row 0 or column 0. [`NeighborBound::ExcludeOrigin`] keeps that
/// behaviour for callers comparing against those outputs; everything else
/// should use the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborBound {
    /// Every in-bounds cell may be relaxed.
    #[default]
    Inclusive,
    /// Row 0 and column 0 are never relaxed as neighbour targets.
    ExcludeOrigin,
}

impl NeighborBound {
    /// Whether `p` may be relaxed as a neighbour inside `bounds`.
    #[inline]
    pub fn admits(self, bounds: Range, p: Point) -> bool {
        match self {
            NeighborBound::Inclusive => bounds.contains(p),
            NeighborBound::ExcludeOrigin => {
                bounds.contains(p) && p.x > bounds.min.x && p.y > bounds.min.y
            }
        }
    }

    /// Append the 8-directional neighbours of `p` admitted by this bound and
    /// by `keep`.
    pub fn neighbors(
        self,
        bounds: Range,
        p: Point,
        keep: impl Fn(Point) -> bool,
        buf: &mut Vec<Point>,
    ) {
        for n in p.neighbors_8() {
            if self.admits(bounds, n) && keep(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_admits_all_in_bounds() {
        let b = Range::with_size(3, 3);
        let mut buf = Vec::new();
        NeighborBound::Inclusive.neighbors(b, Point::new(0, 0), |_| true, &mut buf);
        buf.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            buf,
            vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
        );

        buf.clear();
        NeighborBound::Inclusive.neighbors(b, Point::new(1, 1), |_| true, &mut buf);
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn exclude_origin_drops_first_row_and_column() {
        let b = Range::with_size(3, 3);
        let mut buf = Vec::new();
        NeighborBound::ExcludeOrigin.neighbors(b, Point::new(1, 1), |_| true, &mut buf);
        buf.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            buf,
            vec![Point::new(1, 2), Point::new(2, 1), Point::new(2, 2)]
        );
        assert!(!NeighborBound::ExcludeOrigin.admits(b, Point::new(0, 2)));
        assert!(!NeighborBound::ExcludeOrigin.admits(b, Point::new(2, 0)));
        assert!(NeighborBound::Inclusive.admits(b, Point::new(2, 0)));
    }

    #[test]
    fn keep_filters_neighbors() {
        let b = Range::with_size(3, 3);
        let mut buf = Vec::new();
        NeighborBound::Inclusive.neighbors(b, Point::new(1, 1), |p| p.x != 2, &mut buf);
        assert_eq!(buf.len(), 5);
        assert!(buf.iter().all(|p| p.x != 2));
    }
}

//! A dense, row-major raster of values.
//!
//! [`Grid`] owns its cells in a single `Vec`, addressed by [`Point`] with
//! `x` as the row and `y` as the column. Cost rasters are `Grid<i32>`,
//! visualization channels are `Grid<u8>`.

use crate::geom::{Point, Range};

/// Errors raised when building a [`Grid`] from caller data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows, or rows without columns.
    #[error("grid is empty")]
    Empty,
    /// A row does not have the same length as the first row.
    #[error("grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer does not hold `rows * cols` cells.
    #[error("grid buffer holds {found} cells, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// A rectangular 2D raster of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a new grid filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a new grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Fails if there are no cells or if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            rows: n_rows,
            cols,
        })
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Fill the entire grid with the given value.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, T)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(<[T]>::to_vec).collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != rows * cols {
            return Err(GridError::SizeMismatch {
                expected: rows * cols,
                found: cells.len(),
            });
        }
        Ok(Self { cells, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The range `[(0, 0), (rows, cols))` covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows as i32, self.cols as i32)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.cols + p.y as usize)
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

/// Deserialization goes through [`Grid::from_vec`], so a buffer that does
/// not hold `rows * cols` cells is rejected.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<C> {
            cells: Vec<C>,
            rows: usize,
            cols: usize,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Grid::from_vec(raw.rows, raw.cols, raw.cells).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g: Grid<i32> = Grid::new(5, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.len(), 50);
        assert_eq!(g.bounds(), Range::with_size(5, 10));
        assert_eq!(g.at(Point::new(4, 9)), Some(0));
    }

    #[test]
    fn test_set_and_at() {
        let mut g: Grid<i32> = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, 42);
        assert_eq!(g.at(p), Some(42));
        assert_eq!(g.at(Point::new(0, 0)), Some(0));
        assert_eq!(g.at(Point::new(10, 10)), None);
        g.set(Point::new(-1, 0), 7);
        assert!(g.iter().all(|(_, c)| c != 7));
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Point::new(0, 2)), Some(3));
        assert_eq!(g.at(Point::new(1, 0)), Some(4));
        assert_eq!(g.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(g.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::<i32>::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::<i32>::from_rows(vec![vec![], vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_from_vec() {
        let g = Grid::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(g.at(Point::new(1, 1)), Some(4));
        assert_eq!(
            Grid::from_vec(2, 2, vec![1u8, 2, 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(Grid::<u8>::from_vec(0, 2, vec![]), Err(GridError::Empty));
    }

    #[test]
    fn test_index_round_trip() {
        let g: Grid<u8> = Grid::new(3, 7);
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(i, (p.x * 7 + p.y) as usize);
        }
        assert_eq!(g.index(Point::new(3, 0)), None);
    }

    #[test]
    fn test_fill() {
        let mut g: Grid<u8> = Grid::new(5, 5);
        g.set(Point::new(3, 3), 9);
        g.fill(1);
        assert!(g.as_slice().iter().all(|&c| c == 1));
    }

    #[test]
    fn test_iter() {
        let mut g: Grid<i32> = Grid::new(2, 3);
        g.set(Point::new(0, 1), 5);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(0, 1), 5));
        assert_eq!(items[3], (Point::new(1, 0), 0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = serde_json::from_str::<Grid<i32>>(r#"{"cells":[1],"rows":2,"cols":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let res = serde_json::from_str::<Grid<i32>>(r#"{"cells":[],"rows":0,"cols":3}"#);
        assert!(res.is_err());
    }
}

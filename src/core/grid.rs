//! Two-dimensional grid with row-major flat storage
//!
//! Cell (r, c) lives at flat index `r * cols + c`. The flat vector is never handed
//! out; callers go through the bounds-checked accessors below.

use std::ops::{Index, Range};

use super::error::GridError;

/// Rectangular grid of `rows x cols` cells
///
/// Invariant: `cells.len() == rows * cols` before and after every operation.
///
/// # Examples
/// ```
/// use wordle_daily::core::Grid2D;
///
/// let mut grid = Grid2D::new(2, 3, 0);
/// grid.set(1, 2, 7).unwrap();
///
/// assert_eq!(grid.row(1).unwrap(), &[0, 0, 7]);
/// assert_eq!(grid.column(2).unwrap(), vec![0, 7]);
/// assert_eq!(grid.subrect(0..2, 0..3).unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid2D<T> {
    /// Create a grid with every cell set to `fill`
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Build a grid from whole rows
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if any row does not have exactly `cols` cells.
    pub fn from_rows<I>(cols: usize, rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut grid = Self {
            rows: 0,
            cols,
            cells: Vec::new(),
        };
        for row in rows {
            grid.append_row(&row)?;
        }
        Ok(grid)
    }

    /// Set a single cell
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if (row, col) is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        let idx = self.flat_index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Column `j` from top to bottom
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `j >= cols`.
    pub fn column(&self, j: usize) -> Result<Vec<T>, GridError> {
        if j >= self.cols {
            return Err(self.out_of_range(0, j));
        }
        Ok(self.rows().map(|row| row[j].clone()).collect())
    }

    /// Copy out the cells in `row_range x col_range` as a new grid
    ///
    /// Ordering is preserved, so the full ranges give back an equal grid.
    ///
    /// # Errors
    /// Returns `RangeOutOfBounds` if either range is reversed or runs past the grid.
    pub fn subrect(
        &self,
        row_range: Range<usize>,
        col_range: Range<usize>,
    ) -> Result<Self, GridError> {
        check_range(&row_range, self.rows)?;
        check_range(&col_range, self.cols)?;

        let cells = row_range
            .clone()
            .flat_map(|r| self.row_slice(r)[col_range.clone()].iter().cloned())
            .collect();

        Ok(Self {
            rows: row_range.len(),
            cols: col_range.len(),
            cells,
        })
    }

    /// Add a row at the bottom, growing the grid by one row
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `values.len() != cols`; the grid is left untouched.
    pub fn append_row(&mut self, values: &[T]) -> Result<(), GridError> {
        self.check_width(values)?;
        self.cells.extend_from_slice(values);
        self.rows += 1;
        Ok(())
    }

    /// Overwrite row `i` in place
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `i >= rows`, or `ShapeMismatch` if
    /// `values.len() != cols`.
    pub fn set_row(&mut self, i: usize, values: &[T]) -> Result<(), GridError> {
        if i >= self.rows {
            return Err(self.out_of_range(i, 0));
        }
        self.check_width(values)?;
        let start = i * self.cols;
        self.cells[start..start + self.cols].clone_from_slice(values);
        Ok(())
    }
}

impl<T> Grid2D<T> {
    /// (rows, cols)
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrow a single cell
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if (row, col) is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let idx = self.flat_index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Row `i` from left to right
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `i >= rows`.
    pub fn row(&self, i: usize) -> Result<&[T], GridError> {
        if i >= self.rows {
            return Err(self.out_of_range(i, 0));
        }
        Ok(self.row_slice(i))
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(|r| self.row_slice(r))
    }

    fn row_slice(&self, r: usize) -> &[T] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn check_width(&self, values: &[T]) -> Result<(), GridError> {
        if values.len() == self.cols {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected: self.cols,
                actual: values.len(),
            })
        }
    }
}

/// Panicking access for callers that already hold a valid (row, col)
impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

const fn check_range(range: &Range<usize>, len: usize) -> Result<(), GridError> {
    if range.start > range.end || range.end > len {
        return Err(GridError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

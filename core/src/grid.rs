//! Two-dimensional data as a view of row views.
//!
//! Each row is an ordinary [`View`] with its own store, so rows never alias
//! one another unless the caller puts the same view (or a slice of it) in two
//! rows on purpose.

use crate::error::{Axis, Result};
use crate::options::ViewOptions;
use crate::view::View;

/// A sequence of rows.
pub type Grid<T> = View<View<T>>;

impl<T> View<View<T>> {
    /// Allocate `rows` independent zeroed rows of `cols` elements each.
    pub fn grid(rows: usize, cols: usize) -> Result<Self>
    where
        T: Clone + Default,
    {
        Self::grid_with(rows, cols, &ViewOptions::default())
    }

    /// Like [`grid`](Self::grid), honoring `options.max_capacity` for every
    /// store allocated, the row table included.
    pub fn grid_with(rows: usize, cols: usize, options: &ViewOptions) -> Result<Self>
    where
        T: Clone + Default,
    {
        let grid = View::make_in(rows, rows, options)?;
        for r in 0..rows {
            grid.set(r, View::make_in(cols, cols, options)?)?;
        }
        Ok(grid)
    }

    /// Build a grid by appending `f(row, col)` onto initially nil rows.
    ///
    /// ```
    /// use sliver_core::Grid;
    ///
    /// let pic = Grid::from_fn(3, 4, |y, x| (x * x + y * y) as u8).unwrap();
    /// assert_eq!(pic.row(2).unwrap().to_vec(), [4, 5, 8, 13]);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self>
    where
        T: Clone + Default,
    {
        let grid = View::make(rows, rows)?;
        for r in 0..rows {
            let mut row = View::new();
            for c in 0..cols {
                row = row.append([f(r, c)])?;
            }
            grid.set(r, row)?;
        }
        Ok(grid)
    }

    /// One fresh store per row, sized exactly to its literal.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
    {
        View::from_literal(rows.into_iter().map(|row| View::from_literal(row)))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.len()
    }

    pub fn row(&self, r: usize) -> Result<View<T>> {
        self.get(r).map_err(|e| e.on_axis(Axis::Row))
    }

    /// Length of row `r`. Rows need not be the same length.
    pub fn cols(&self, r: usize) -> Result<usize> {
        Ok(self.row(r)?.len())
    }

    pub fn cell(&self, r: usize, c: usize) -> Result<T>
    where
        T: Clone,
    {
        self.row(r)?.get(c).map_err(|e| e.on_axis(Axis::Column))
    }

    pub fn set_cell(&self, r: usize, c: usize, value: T) -> Result<()> {
        self.row(r)?.set(c, value).map_err(|e| e.on_axis(Axis::Column))
    }
}

use thiserror::Error;

use crate::cell::Cell;
use crate::cell::CellValueError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Row {row} has {got} cells, expected {exp}")]
    RaggedRows { row: usize, exp: usize, got: usize },

    #[error("Invalid cell at ({row}, {col}): {source}")]
    InvalidCell {
        row: usize,
        col: usize,
        source: CellValueError,
    },
}

/// One generation of the board.
///
/// Cells are stored row-major, top row first. The dimensions are fixed when the grid is built and
/// there is no way to change them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `width` x `height` grid where every cell is dead
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from rows of `0`s and `1`s. Every row must be as long as the first one.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        Self::check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();

            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    exp: width,
                    got: values.len(),
                });
            }

            for (col, &v) in values.iter().enumerate() {
                let cell = Cell::try_from(v)
                    .map_err(|source| GridError::InvalidCell { row, col, source })?;

                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid by asking `f` for the state of every `(row, col)`, in row-major order.
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> Cell,
    {
        Self::check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` lies on the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// The cell at `(row, col)`, or `None` if it's off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }

        Some(self.cells[self.offset(row, col)])
    }

    /// Set the cell at `(row, col)`. Panics if the coordinate is off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        let i = self.offset(row, col);
        self.cells[i] = cell;
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            self.contains(row, col),
            "({row}, {col}) is outside of a {}x{} grid",
            self.width,
            self.height
        );

        &self.cells[self.offset(row, col)]
    }
}

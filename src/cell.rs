use thiserror::Error;

/// The state of a single cell of a [`Grid`](crate::grid::Grid).
///
/// The discriminants are the integer view of a cell: `0` is dead, `1` is alive.
#[repr(u8)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cell values are 0 or 1, got {0}")]
pub struct CellValueError(pub u8);

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            n => Err(CellValueError(n)),
        }
    }
}

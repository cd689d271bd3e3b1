use std::fmt;
use std::io;

use crate::cell::Cell;
use crate::grid::Grid;

const BORDER_TOP: char = '-';
const BORDER_SIDE: char = '|';

const GLYPH_ALIVE: char = '#';
const GLYPH_DEAD: char = ' ';

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => GLYPH_ALIVE,
        Cell::Dead => GLYPH_DEAD,
    }
}

/// Draws the grid as a block of text:
///
/// ```notrust
/// -----
/// |#  |
/// | # |
/// ```
///
/// The top border is `width + 2` wide to cover the side borders. There is no bottom border.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.width() + 2 {
            write!(f, "{BORDER_TOP}")?;
        }
        writeln!(f)?;

        for row in self.rows() {
            write!(f, "{BORDER_SIDE}")?;
            for &cell in row {
                write!(f, "{}", glyph(cell))?;
            }
            writeln!(f, "{BORDER_SIDE}")?;
        }

        Ok(())
    }
}

/// Write `grid` to `out`, see the [`Display`](fmt::Display) impl of [`Grid`] for the format.
pub fn render<W: io::Write + ?Sized>(grid: &Grid, out: &mut W) -> io::Result<()> {
    // Build the frame first so it reaches `out` in a single write
    let frame = to_string(grid);

    out.write_all(frame.as_bytes())?;
    out.flush()
}

pub fn to_string(grid: &Grid) -> String {
    let cap = (grid.width() + 3) * (grid.height() + 1);
    let mut s = String::with_capacity(cap);

    // Writing to a `String` can't fail
    let _ = fmt::write(&mut s, format_args!("{grid}"));

    s
}

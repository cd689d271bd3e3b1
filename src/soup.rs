//! Random starting grids, known as "soups".

use rand::Rng;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::GridError;

/// A `width` x `height` soup drawn from the thread local RNG.
///
/// There is no way to reproduce a soup made this way, use [`random_with`] for that.
pub fn random(width: usize, height: usize) -> Result<Grid, GridError> {
    random_with(width, height, &mut rand::thread_rng())
}

/// A `width` x `height` soup where every cell is alive with probability `1/2`, independently of
/// the others.
pub fn random_with<R>(width: usize, height: usize, rng: &mut R) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    Grid::from_fn(width, height, |_, _| Cell::from(rng.gen_bool(0.5)))
}

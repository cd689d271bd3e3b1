use std::io;
use std::thread;

use tracing::debug;

use crate::config::Config;
use crate::grid::Grid;
use crate::io::try_clear;
use crate::render::render;
use crate::rules::next_generation;

/// Animate `grid` on `out` for as long as `keep_running` says so.
///
/// Each frame clears the terminal, draws the current generation, moves on to the next one and
/// then sleeps for `config.frame_delay`. `keep_running` is asked before every frame, pass
/// `|| true` to run until the process is killed.
///
/// Returns the generation that would have been drawn next. Clearing the terminal is best effort,
/// any other write error ends the animation.
pub fn run<W, F>(
    mut grid: Grid,
    config: &Config,
    out: &mut W,
    mut keep_running: F,
) -> io::Result<Grid>
where
    W: io::Write,
    F: FnMut() -> bool,
{
    let mut generation: u64 = 0;

    while keep_running() {
        try_clear(out);
        render(&grid, out)?;

        debug!(generation, population = grid.population(), "drew generation");

        grid = next_generation(&grid);
        generation += 1;

        if !config.frame_delay.is_zero() {
            thread::sleep(config.frame_delay);
        }
    }

    Ok(grid)
}

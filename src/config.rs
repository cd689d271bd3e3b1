use std::time::Duration;

/// Width of the reference board, in cells
pub const WIDTH: usize = 20;

/// Height of the reference board, in cells
pub const HEIGHT: usize = 20;

const FRAMERATE: u32 = 10;
pub const FRAMETIME: Duration = Duration::from_millis(1_000 / FRAMERATE as u64);

/// Board size and animation speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,

    /// Pause between two frames
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            frame_delay: FRAMETIME,
        }
    }
}

use std::io;

use crossterm::cursor;
use crossterm::queue;
use crossterm::terminal;
use tracing::warn;

/// Wipe the terminal behind `out` and put the cursor back in the top left corner.
///
/// crossterm picks the right mechanism for the host, ANSI escape codes on POSIX-like terminals and
/// the console API on older Windows consoles.
pub fn clear<W: io::Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    out.flush()
}

/// Like [`clear`], but a failure is only logged. A frame drawn below the previous one is still
/// better than no frame at all.
pub fn try_clear<W: io::Write>(out: &mut W) {
    if let Err(e) = clear(out) {
        warn!("Failed to clear the terminal: {e}");
    }
}

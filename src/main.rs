use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life::config::Config;
use life::driver;
use life::soup;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the animation, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let grid = soup::random(config.width, config.height)
        .context("Failed to seed the starting grid")?;

    info!(
        width = config.width,
        height = config.height,
        population = grid.population(),
        "starting"
    );

    let mut stdout = io::stdout().lock();
    driver::run(grid, &config, &mut stdout, || true).context("Failed to draw the grid")?;

    Ok(())
}

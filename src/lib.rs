pub mod cell;
pub mod config;
pub mod driver;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod soup;

pub use cell::Cell;
pub use grid::Grid;
pub use grid::GridError;

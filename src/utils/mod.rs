//! Utility modules for mazebot

pub mod grid_map;
pub mod maze_loader;
pub mod maze_generator;
pub mod frame;
pub mod console;
pub mod visualization;

pub use grid_map::*;
pub use maze_loader::*;
pub use maze_generator::*;
pub use frame::*;
pub use console::*;
pub use visualization::{Visualizer, PlotReporter, PlotConfig, ImageFormat, colors};

//! Visualization utilities for mazebot
//!
//! Renders observation frames with gnuplot, one colored square per cell.

use std::fs;
use std::path::{Path, PathBuf};

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};

use crate::common::{MazeError, MazeResult, Reporter, Tile};
use crate::utils::{Frame, Observation, ObservationKind};

/// Color palette, matching the maze legend
pub mod colors {
    use crate::common::Tile;

    pub const OPEN: &str = "#FFFFFF";
    pub const WALL: &str = "#000000";
    pub const PATH: &str = "#FF0000";
    pub const EXPLORED: &str = "#00FF00";
    pub const START: &str = "#0000FF";
    pub const GOAL: &str = "#FF00FF";

    pub fn for_tile(tile: Tile) -> &'static str {
        match tile {
            Tile::Open => OPEN,
            Tile::Wall => WALL,
            Tile::Path => PATH,
            Tile::Explored => EXPLORED,
            Tile::Start => START,
            Tile::Goal => GOAL,
        }
    }
}

/// Draw order; later tiles are drawn on top
const TILE_LAYERS: [Tile; 6] = [
    Tile::Open,
    Tile::Wall,
    Tile::Explored,
    Tile::Path,
    Tile::Start,
    Tile::Goal,
];

fn legend(tile: Tile) -> &'static str {
    match tile {
        Tile::Open => "Empty Space",
        Tile::Wall => "Wall",
        Tile::Path => "Current Maze Path",
        Tile::Explored => "All Tiles Explored by the Algorithm",
        Tile::Start => "Starting Tile",
        Tile::Goal => "Target Tile",
    }
}

/// Plot coordinates of every `tile` in the frame, row 0 at the top
fn tile_points(frame: &Frame, tile: Tile) -> (Vec<f64>, Vec<f64>) {
    let n = frame.size();
    let mut x = Vec::new();
    let mut y = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if frame.tiles[(row, col)] == tile {
                x.push(col as f64);
                y.push((n - 1 - row) as f64);
            }
        }
    }
    (x, y)
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Plot all cells of a frame on a single square axes
    pub fn plot_frame(&mut self, frame: &Frame) -> &mut Self {
        let n = frame.size();
        let size = (40.0 / n as f64).clamp(0.3, 5.0);
        let span = n as f64 - 0.5;

        let axes = self.figure.axes2d();
        for &tile in TILE_LAYERS.iter() {
            let (x, y) = tile_points(frame, tile);
            if x.is_empty() {
                continue;
            }
            axes.points(&x, &y, &[
                Caption(legend(tile)),
                Color(colors::for_tile(tile)),
                PointSymbol('S'),
                PointSize(size),
            ]);
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_range(AutoOption::Fix(-0.5), AutoOption::Fix(span));
        axes.set_y_range(AutoOption::Fix(-0.5), AutoOption::Fix(span));
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
        self
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &Path, width: u32, height: u32) -> MazeResult<()> {
        let path = path.to_string_lossy();
        self.figure
            .save_to_png(&*path, width, height)
            .map_err(|e| MazeError::Visualization(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &Path, width: u32, height: u32) -> MazeResult<()> {
        let path = path.to_string_lossy();
        self.figure
            .save_to_svg(&*path, width, height)
            .map_err(|e| MazeError::Visualization(e.to_string()))
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Image file format of saved frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Configuration for plotted frame output
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory receiving `frame_NNNNN.<ext>`
    pub output_dir: PathBuf,
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Render every n-th progress frame; initial and final frames are always rendered
    pub every: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("img/mazebot"),
            format: ImageFormat::Png,
            width: 640,
            height: 480,
            every: 1,
        }
    }
}

/// Reporter saving each observation as a numbered image
pub struct PlotReporter {
    config: PlotConfig,
    frame_index: usize,
    explored_count: usize,
}

impl PlotReporter {
    /// Create the reporter and its output directory
    pub fn new(config: PlotConfig) -> MazeResult<Self> {
        if config.every == 0 {
            return Err(MazeError::InvalidParameter("plot interval must be at least 1".to_string()));
        }
        fs::create_dir_all(&config.output_dir)?;
        Ok(PlotReporter {
            config,
            frame_index: 0,
            explored_count: 0,
        })
    }

    /// Number of observations seen so far
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    fn should_render(&self, kind: ObservationKind) -> bool {
        match kind {
            ObservationKind::Progress => self.frame_index % self.config.every == 0,
            _ => true,
        }
    }

    fn frame_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("frame_{:05}.{}", self.frame_index, self.config.format.extension()))
    }

    fn render(&self, frame: &Frame) -> MazeResult<()> {
        let mut vis = Visualizer::new();
        vis.set_title(&format!("A* Maze Search - Explored: {}", self.explored_count));
        vis.plot_frame(frame);
        let path = self.frame_path();
        match self.config.format {
            ImageFormat::Png => vis.save_png(&path, self.config.width, self.config.height),
            ImageFormat::Svg => vis.save_svg(&path, self.config.width, self.config.height),
        }
    }
}

impl Reporter for PlotReporter {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        self.explored_count = observation.explored_count();
        if self.should_render(observation.kind()) {
            if let Err(e) = self.render(&observation.frame()) {
                log::warn!("Failed to save {}: {}", self.frame_path().display(), e);
            }
        }
        self.frame_index += 1;
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        self.explored_count = count;
    }
}

//! Solve a maze with A* and show every expansion
//!
//! Usage:
//!   cargo run --bin mazebot -- maze.txt
//!   cargo run --bin mazebot -- --random 20 --seed 7 --quiet
//!   cargo run --bin mazebot -- maze.txt --plot-dir img/mazebot
//!   cargo run --bin mazebot -- maze.txt --plot-dir img/mazebot --svg
//!
//! Enable search statistics with:
//!   RUST_LOG=debug cargo run --bin mazebot

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mazebot::utils::{
    generate_maze, load_maze, write_maze, write_summary, ConsoleReporter, ImageFormat,
    MazeGeneratorConfig, PlotConfig, PlotReporter, DEFAULT_MAZE_FILE,
};
use mazebot::{AStarConfig, AStarPlanner, Grid, MazeResult};

/// A* shortest path search on grid mazes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file: a size line followed by that many rows of `.`, `#`, `S`, `G`
    #[arg(default_value = DEFAULT_MAZE_FILE)]
    maze: PathBuf,

    /// Solve a random maze of this size instead of reading a file
    #[arg(long)]
    random: Option<usize>,

    /// Wall probability for random mazes
    #[arg(long, default_value = "0.3")]
    wall_probability: f64,

    /// Seed for random mazes (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the initial maze and the summary
    #[arg(short, long)]
    quiet: bool,

    /// Save every frame as an image into this directory (needs gnuplot installed)
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Save plotted frames as SVG instead of PNG
    #[arg(long)]
    svg: bool,

    /// Plot only every n-th progress frame
    #[arg(long, default_value = "1")]
    plot_every: usize,

    /// Frame image width in pixels
    #[arg(long, default_value = "640")]
    frame_width: u32,

    /// Frame image height in pixels
    #[arg(long, default_value = "480")]
    frame_height: u32,

    /// Log search statistics every n expansions
    #[arg(long, default_value = "100")]
    log_interval: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("mazebot: {}", e);
        process::exit(1);
    }
}

fn load(args: &Args) -> MazeResult<Grid> {
    match args.random {
        Some(size) => {
            let seed = args.seed.unwrap_or_else(rand::random);
            log::info!("Generating {}x{} maze with seed {}", size, size, seed);
            let config = MazeGeneratorConfig {
                size,
                wall_probability: args.wall_probability,
            };
            generate_maze(&config, &mut StdRng::seed_from_u64(seed))
        }
        None => load_maze(&args.maze),
    }
}

fn run(args: &Args) -> MazeResult<()> {
    let grid = load(args)?;
    write_maze(&mut io::stdout().lock(), &grid)?;

    let console = (!args.quiet).then(ConsoleReporter::stdout);
    let plot = match &args.plot_dir {
        Some(dir) => Some(PlotReporter::new(PlotConfig {
            output_dir: dir.clone(),
            format: if args.svg { ImageFormat::Svg } else { ImageFormat::Png },
            width: args.frame_width,
            height: args.frame_height,
            every: args.plot_every,
        })?),
        None => None,
    };

    let planner = AStarPlanner::new(AStarConfig {
        log_interval: args.log_interval,
    });
    let outcome = planner.search(&grid, (console, plot));

    write_summary(&mut io::stdout().lock(), &grid, &outcome)?;
    Ok(())
}

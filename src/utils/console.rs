//! Console output: frame printing and the final search summary

use std::io::{self, Stdout, Write};

use crate::common::Reporter;
use crate::path_planning::SearchOutcome;
use crate::utils::{Frame, Grid, Observation, ObservationKind};

/// Width of the line printed under every frame
pub const SEPARATOR_WIDTH: usize = 147;

/// Write a frame surrounded by a blank line and a separator
pub fn write_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", frame)?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))
}

/// Write the unannotated maze
pub fn write_maze<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let frame = Frame::annotate(ObservationKind::Initial, grid, std::iter::empty(), &[], 0);
    write_frame(out, &frame)
}

/// Write the final report: path taken, explored cells and explored count
pub fn write_summary<W: Write>(out: &mut W, grid: &Grid, outcome: &SearchOutcome) -> io::Result<()> {
    let kind = ObservationKind::Final { found: outcome.found };

    writeln!(out, "a) Final Path Taken by the Bot (Path = X):")?;
    if outcome.found {
        let path = outcome.path();
        let frame = Frame::annotate(kind, grid, std::iter::empty(), &path, outcome.explored_count);
        write_frame(out, &frame)?;
    } else {
        writeln!(out, "A solution cannot be found.")?;
        writeln!(out)?;
    }

    writeln!(out, "b) All the  locations  that  were  explored:")?;
    let frame = Frame::annotate(kind, grid, outcome.explored().iter(), &[], outcome.explored_count);
    write_frame(out, &frame)?;

    writeln!(out, "c) Total Number of Explored States: {}", outcome.explored_count)?;
    if !outcome.found {
        writeln!(out, "A solution cannot be found.")?;
    }
    Ok(())
}

/// Reporter printing every observation frame
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        if let Err(e) = write_frame(&mut self.out, &observation.frame()) {
            log::warn!("Failed to print frame: {}", e);
        }
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        log::trace!("Explored count: {}", count);
    }
}

//! Common traits defining interfaces for maze search

use crate::common::error::MazeResult;
use crate::common::types::Coordinate;
use crate::utils::{Grid, Observation};

/// Estimate of the remaining cost between two cells
pub trait Heuristic {
    fn estimate(&self, a: Coordinate, b: Coordinate) -> u32;
}

/// Manhattan distance, admissible and consistent for 4-connected unit moves
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, a: Coordinate, b: Coordinate) -> u32 {
        a.manhattan(&b)
    }
}

/// Receives search observations.
///
/// Called synchronously by the search controller; the search resumes only
/// after the call returns.
pub trait Reporter {
    /// Called at initialization, after each expansion and at completion
    fn on_observation(&mut self, observation: &Observation<'_>);

    /// Called after each successful expansion with the running explored count
    fn on_explored_count_changed(&mut self, count: usize);
}

/// Reporter that ignores everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_observation(&mut self, _observation: &Observation<'_>) {}

    fn on_explored_count_changed(&mut self, _count: usize) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        (**self).on_observation(observation);
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        (**self).on_explored_count_changed(count);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        (**self).on_observation(observation);
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        (**self).on_explored_count_changed(count);
    }
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        self.0.on_observation(observation);
        self.1.on_observation(observation);
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        self.0.on_explored_count_changed(count);
        self.1.on_explored_count_changed(count);
    }
}

impl<R: Reporter> Reporter for Option<R> {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        if let Some(reporter) = self {
            reporter.on_observation(observation);
        }
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        if let Some(reporter) = self {
            reporter.on_explored_count_changed(count);
        }
    }
}

/// Trait for grid path planning algorithms
pub trait PathPlanner {
    /// Plan a path from the grid's start to its goal, both endpoints included
    fn plan(&self, grid: &Grid) -> MazeResult<Vec<Coordinate>>;
}

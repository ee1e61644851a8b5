//! A* search on a 4-connected maze grid
//!
//! Each iteration expands the cheapest unexplored cell, pushing its
//! neighbors only when no equal-or-better priority is already pending for
//! them. Stale frontier entries are skipped on pop. The search stops when the
//! goal is expanded or the frontier runs dry, and reports every expansion to
//! a `Reporter`.

use crate::common::{Coordinate, Heuristic, Manhattan, MazeError, MazeResult, NullReporter, PathPlanner, Reporter};
use crate::path_planning::explored::{BestPriorityMap, ExploredSet};
use crate::path_planning::frontier::Frontier;
use crate::path_planning::search_node::{NodeArena, NodeId, SearchNode};
use crate::utils::{Grid, Observation, ObservationKind};

/// Configuration for A* search
#[derive(Debug, Clone)]
pub struct AStarConfig {
    /// Log frontier statistics every this many expansions (0 disables)
    pub log_interval: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self { log_interval: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initializing,
    Searching,
    Succeeded,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Succeeded | SearchState::Exhausted)
    }
}

/// Result of one search run.
///
/// Owns the node arena so the final node's predecessor chain can be walked.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub explored_count: usize,
    pub found: bool,
    final_node: NodeId,
    nodes: NodeArena,
    explored: ExploredSet,
}

impl SearchOutcome {
    /// Goal node on success, last expanded node otherwise
    pub fn final_node(&self) -> &SearchNode {
        &self.nodes[self.final_node]
    }

    pub fn final_node_id(&self) -> NodeId {
        self.final_node
    }

    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    /// Start-to-goal route, empty when no path exists
    pub fn path(&self) -> Vec<Coordinate> {
        if self.found {
            self.nodes.path_to(self.final_node)
        } else {
            Vec::new()
        }
    }

    /// Number of moves on the found path
    pub fn path_len(&self) -> Option<u32> {
        self.found.then(|| self.final_node().cost())
    }
}

/// Search controller. Owns all per-search state; build a new one per run.
pub struct AStarSearch<'g, R, H = Manhattan> {
    grid: &'g Grid,
    heuristic: H,
    reporter: R,
    config: AStarConfig,
    frontier: Frontier,
    explored: ExploredSet,
    best_priority: BestPriorityMap,
    nodes: NodeArena,
    current: NodeId,
    state: SearchState,
    iterations: usize,
}

impl<'g, R: Reporter> AStarSearch<'g, R, Manhattan> {
    pub fn new(grid: &'g Grid, reporter: R) -> Self {
        Self::with_heuristic(grid, Manhattan, reporter)
    }
}

impl<'g, R: Reporter, H: Heuristic> AStarSearch<'g, R, H> {
    pub fn with_heuristic(grid: &'g Grid, heuristic: H, reporter: R) -> Self {
        let capacity = grid.size() * grid.size();
        let mut nodes = NodeArena::with_capacity(capacity);
        let start = grid.start();
        let root = nodes.push(SearchNode::new(
            start,
            0,
            heuristic.estimate(start, grid.goal()),
            None,
        ));

        AStarSearch {
            grid,
            heuristic,
            reporter,
            config: AStarConfig::default(),
            frontier: Frontier::with_capacity(capacity),
            explored: ExploredSet::with_capacity(capacity),
            best_priority: BestPriorityMap::with_capacity(capacity),
            nodes,
            current: root,
            state: SearchState::Initializing,
            iterations: 0,
        }
    }

    pub fn with_config(mut self, config: AStarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Run to completion
    pub fn run(mut self) -> SearchOutcome {
        while !self.step().is_terminal() {}
        self.into_outcome()
    }

    /// Advance the state machine by one transition and return the new state.
    ///
    /// Entering a terminal state emits the final observation; stepping a
    /// finished search does nothing.
    pub fn step(&mut self) -> SearchState {
        let next = match self.state {
            SearchState::Initializing => self.initialize(),
            SearchState::Searching => self.expand_next(),
            terminal => return terminal,
        };
        self.state = next;
        if next.is_terminal() {
            self.finish();
        }
        next
    }

    /// Consume the controller. `found` is set only if the search succeeded.
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            explored_count: self.explored.len(),
            found: self.state == SearchState::Succeeded,
            final_node: self.current,
            nodes: self.nodes,
            explored: self.explored,
        }
    }

    fn initialize(&mut self) -> SearchState {
        let root = self.nodes[self.current];
        self.explored.add(root.coordinate());
        self.best_priority.record_if_better(root.coordinate(), root.priority());
        log::debug!("Start at {}, goal at {}", root.coordinate(), self.grid.goal());
        self.emit(ObservationKind::Initial);
        SearchState::Searching
    }

    fn expand_next(&mut self) -> SearchState {
        let current = self.nodes[self.current];
        if current.coordinate() == self.grid.goal() {
            return SearchState::Succeeded;
        }

        self.expand(self.current, current);
        let next = match self.pop_unexplored() {
            Some(next) => next,
            None => return SearchState::Exhausted,
        };
        self.current = next;
        self.explored.add(self.nodes[next].coordinate());

        self.iterations += 1;
        if self.config.log_interval > 0 && self.iterations % self.config.log_interval == 0 {
            log::debug!(
                "Iteration: {}, Open set size: {}, Closed set size: {}",
                self.iterations,
                self.frontier.len(),
                self.explored.len()
            );
        }

        self.emit(ObservationKind::Progress);
        self.reporter.on_explored_count_changed(self.explored.len());
        SearchState::Searching
    }

    fn finish(&mut self) {
        let found = self.state == SearchState::Succeeded;
        self.emit(ObservationKind::Final { found });

        let explored_count = self.explored.len();
        if found {
            log::info!(
                "Find goal {} after {} expansions, path length {}",
                self.grid.goal(),
                explored_count,
                self.nodes[self.current].cost()
            );
        } else {
            log::info!("Open set is empty after {} expansions, no path", explored_count);
        }
    }

    fn expand(&mut self, id: NodeId, node: SearchNode) {
        let grid = self.grid;
        let goal = grid.goal();
        for neighbor in grid.neighbors(node.coordinate()) {
            if self.explored.contains(neighbor) {
                continue;
            }
            let candidate = SearchNode::new(
                neighbor,
                node.cost() + 1,
                self.heuristic.estimate(neighbor, goal),
                Some(id),
            );
            if self.best_priority.record_if_better(neighbor, candidate.priority()) {
                let candidate_id = self.nodes.push(candidate);
                self.frontier.push(candidate_id, candidate.priority());
            }
        }
    }

    /// Pop until an entry for a not yet explored cell turns up
    fn pop_unexplored(&mut self) -> Option<NodeId> {
        loop {
            let id = self.frontier.pop_best().ok()?;
            if !self.explored.contains(self.nodes[id].coordinate()) {
                return Some(id);
            }
        }
    }

    fn emit(&mut self, kind: ObservationKind) {
        let observation = Observation::new(kind, self.grid, &self.explored, &self.nodes, self.current);
        self.reporter.on_observation(&observation);
    }
}

/// Headless A* planner
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(config: AStarConfig) -> Self {
        AStarPlanner { config }
    }

    /// Run a full search with the given reporter
    pub fn search<R: Reporter>(&self, grid: &Grid, reporter: R) -> SearchOutcome {
        AStarSearch::new(grid, reporter)
            .with_config(self.config.clone())
            .run()
    }
}

impl PathPlanner for AStarPlanner {
    fn plan(&self, grid: &Grid) -> MazeResult<Vec<Coordinate>> {
        let outcome = self.search(grid, NullReporter);
        if outcome.found {
            Ok(outcome.path())
        } else {
            Err(MazeError::NoPath)
        }
    }
}

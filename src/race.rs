use crate::maze::Maze;
use crate::solvers::{Search, SearchState, Step, Strategy};

/// Coordinates the BFS-vs-DFS race over one maze.
///
/// Owns the maze, the single active search (the two strategies are mutually
/// exclusive by construction), and the running score per strategy: the
/// number of cells each one expanded on its latest run. A rendering
/// collaborator drives [`Race::step`] once per tick and reads cell flags and
/// scores between steps.
pub struct Race {
    maze: Maze,
    search: Option<Search>,
    bfs_steps: u32,
    dfs_steps: u32,
}

impl Race {
    /// Builds the maze for the race. Deterministic per seed.
    ///
    /// # Panics
    /// If `width` or `height` is zero.
    pub fn new(width: u8, height: u8, seed: u64) -> Self {
        Race {
            maze: Maze::build(width, height, seed),
            search: None,
            bfs_steps: 0,
            dfs_steps: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// State of the active search, or `Idle` when none exists.
    pub fn state(&self) -> SearchState {
        self.search
            .as_ref()
            .map(Search::state)
            .unwrap_or(SearchState::Idle)
    }

    /// Expansions of the latest BFS run.
    pub fn bfs_steps(&self) -> u32 {
        self.bfs_steps
    }

    /// Expansions of the latest DFS run.
    pub fn dfs_steps(&self) -> u32 {
        self.dfs_steps
    }

    /// Begins a corner-to-corner run with the given strategy and zeroes that
    /// strategy's score. No-op while another search is running.
    pub fn start(&mut self, strategy: Strategy) {
        if self.state() == SearchState::Running {
            tracing::debug!("[race] start ignored, a search is already running");
            return;
        }
        match strategy {
            Strategy::Bfs => self.bfs_steps = 0,
            Strategy::Dfs => self.dfs_steps = 0,
        }
        self.search = Some(Search::start(
            strategy,
            &self.maze,
            self.maze.start(),
            self.maze.goal(),
        ));
    }

    /// Advances the active search by one unit of work. `Continuing` when no
    /// search is active.
    pub fn step(&mut self) -> Step {
        let Some(search) = self.search.as_mut() else {
            return Step::Continuing;
        };
        let outcome = search.step(&mut self.maze);
        match search.strategy() {
            Strategy::Bfs => self.bfs_steps = search.steps(),
            Strategy::Dfs => self.dfs_steps = search.steps(),
        }
        outcome
    }

    pub fn pause(&mut self) {
        if let Some(search) = self.search.as_mut() {
            search.pause();
        }
    }

    pub fn resume(&mut self) {
        if let Some(search) = self.search.as_mut() {
            search.resume();
        }
    }

    /// Full reset back to `Idle`: drops the active search and re-carves the
    /// maze from its stored seed, clearing all visited/path flags. The maze
    /// shape is identical across resets and both scores are kept.
    pub fn reset(&mut self) {
        tracing::info!("[race] resetting maze, seed {}", self.maze.seed());
        self.search = None;
        self.maze.reset();
    }

    /// Both strategies have finished a run; the lower score wins.
    pub fn winner(&self) -> Option<Strategy> {
        // A paused run is resumable and its score is partial, so neither
        // Running nor Aborted may declare a winner.
        if matches!(self.state(), SearchState::Running | SearchState::Aborted)
            || self.bfs_steps == 0
            || self.dfs_steps == 0
        {
            return None;
        }
        if self.bfs_steps < self.dfs_steps {
            Some(Strategy::Bfs)
        } else {
            Some(Strategy::Dfs)
        }
    }
}

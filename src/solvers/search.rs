use crate::maze::Maze;

use super::Strategy;
use super::frontier::Frontier;

/// Lifecycle of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search exists or a full reset happened.
    Idle,
    /// The frontier is live and `step` performs work.
    Running,
    /// The goal was dequeued and the final path is marked.
    Succeeded,
    /// Paused externally; resumable without losing frontier or seen state.
    Aborted,
}

/// Outcome of one [`Search::step`] call, reported to whoever drives the
/// animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continuing,
    Succeeded,
}

/// Single-step BFS/DFS automaton over a built maze.
///
/// Each `step` call pops one cell from the frontier, expands it, and returns
/// control immediately. Results are identical whether the engine is driven
/// once per animation tick or run to completion in a tight loop.
pub struct Search {
    strategy: Strategy,
    frontier: Frontier,
    /// Dense seen set over the cell arena; a cell is expanded at most once.
    seen: Vec<bool>,
    /// Which cell first discovered each cell; never overwritten.
    reached_from: Vec<Option<(u8, u8)>>,
    start: (u8, u8),
    goal: (u8, u8),
    steps: u32,
    state: SearchState,
}

impl Search {
    /// Begins a run: frontier seeded with `start`, fresh seen set and
    /// reached-from map, state `Running`.
    ///
    /// # Panics
    /// If `start` or `goal` lies outside the maze.
    pub fn start(strategy: Strategy, maze: &Maze, start: (u8, u8), goal: (u8, u8)) -> Self {
        assert!(
            maze.is_in_bounds(start) && maze.is_in_bounds(goal),
            "search endpoints {start:?} -> {goal:?} must be inside the maze"
        );
        let total = maze.total_cells() as usize;
        let mut frontier = Frontier::new(strategy);
        frontier.push(start);
        tracing::info!(strategy = %strategy, ?start, ?goal, "[search] starting run");
        Search {
            strategy,
            frontier,
            seen: vec![false; total],
            reached_from: vec![None; total],
            start,
            goal,
            steps: 0,
            state: SearchState::Running,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cells expanded so far; the per-strategy score.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Advances the search by one frontier-pop-and-expand unit of work.
    ///
    /// Duplicate frontier entries (a cell pushed before it was seen) are
    /// consumed as no-op steps. Paused searches do no work and keep reporting
    /// `Continuing`; a finished search keeps reporting `Succeeded`.
    ///
    /// # Panics
    /// If the frontier runs dry before the goal is dequeued. That is
    /// impossible on a spanning tree with both endpoints inside the maze, so
    /// it indicates a broken invariant rather than an unsolvable maze.
    pub fn step(&mut self, maze: &mut Maze) -> Step {
        match self.state {
            SearchState::Succeeded => return Step::Succeeded,
            SearchState::Idle | SearchState::Aborted => return Step::Continuing,
            SearchState::Running => {}
        }

        assert!(
            !self.frontier.is_empty(),
            "frontier exhausted before reaching the goal"
        );
        let current = self.frontier.pop();

        if current == self.goal {
            self.state = SearchState::Succeeded;
            reconstruct(&self.reached_from, maze, self.start, self.goal);
            tracing::info!(strategy = %self.strategy, steps = self.steps, "[search] goal dequeued");
            return Step::Succeeded;
        }

        let idx = maze.ravel_index(current);
        if self.seen[idx] {
            // Already expanded via another frontier entry.
            return Step::Continuing;
        }

        for neighbor in maze.open_neighbors(current).collect::<Vec<_>>() {
            let n_idx = maze.ravel_index(neighbor);
            if self.seen[n_idx] {
                continue;
            }
            self.frontier.push(neighbor);
            // First discoverer wins.
            if self.reached_from[n_idx].is_none() {
                self.reached_from[n_idx] = Some(current);
            }
        }

        self.seen[idx] = true;
        maze[current].visited = true;
        self.steps += 1;
        Step::Continuing
    }

    /// Pauses a running search; frontier and seen state are kept.
    pub fn pause(&mut self) {
        if self.state == SearchState::Running {
            self.state = SearchState::Aborted;
        }
    }

    /// Resumes a paused search.
    pub fn resume(&mut self) {
        if self.state == SearchState::Aborted {
            self.state = SearchState::Running;
        }
    }

    /// Runs the automaton to completion in a tight loop. Produces exactly the
    /// state that stepping once per tick would.
    pub fn finish(&mut self, maze: &mut Maze) {
        while self.state == SearchState::Running {
            self.step(maze);
        }
    }
}

/// Marks every cell on the unique start-goal path by walking the reached-from
/// map backward from the goal.
///
/// Panics if the goal has no predecessor and is not itself the start, which
/// would mean the search never reached it.
fn reconstruct(reached_from: &[Option<(u8, u8)>], maze: &mut Maze, start: (u8, u8), goal: (u8, u8)) {
    let mut current = goal;
    loop {
        maze[current].on_path = true;
        if current == start {
            return;
        }
        current = reached_from[maze.ravel_index(current)]
            .expect("goal is not reachable through the reached-from map");
    }
}

mod frontier;
mod search;

pub use frontier::Frontier;
pub use search::{Search, SearchState, Step};

/// Which frontier discipline drives a run: FIFO for breadth-first, LIFO for
/// depth-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Strategy::Dfs => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

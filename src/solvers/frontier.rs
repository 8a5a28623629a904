use std::collections::VecDeque;

use super::Strategy;

/// Worklist of cells pending expansion.
///
/// One container, two disciplines: DFS pushes to the front and BFS to the
/// back, while `pop` always takes from the front. Insertion order among
/// same-priority cells is preserved; no other ordering is guaranteed.
pub struct Frontier {
    items: VecDeque<(u8, u8)>,
    strategy: Strategy,
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self {
        Frontier {
            items: VecDeque::new(),
            strategy,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, cell: (u8, u8)) {
        match self.strategy {
            Strategy::Dfs => self.items.push_front(cell),
            Strategy::Bfs => self.items.push_back(cell),
        }
    }

    /// Removes and returns one cell: the most recently pushed for DFS, the
    /// earliest still present for BFS.
    ///
    /// # Panics
    /// If the frontier is empty; callers must check [`Frontier::is_empty`]
    /// first.
    pub fn pop(&mut self) -> (u8, u8) {
        self.items.pop_front().expect("popped an empty frontier")
    }
}

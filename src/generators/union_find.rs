/// Disjoint-set forest over cell arena indices, tracking which cells are
/// already connected while the spanning tree is being carved.
///
/// `find` deliberately performs no path compression: lookups never mutate the
/// forest, so which tree gets carved is fully determined by edge weights and
/// processing order.
pub struct UnionFind {
    parent: Vec<u16>,
}

impl UnionFind {
    pub fn new(size: u16) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    /// Follows parent pointers until reaching a cell that is its own parent.
    /// Idempotent; every cell in one component resolves to the same root.
    pub fn find(&self, mut x: u16) -> u16 {
        while self.parent[x as usize] != x {
            x = self.parent[x as usize];
        }
        x
    }

    /// Merges the components rooted at `a` and `b` by repointing `b` to `a`.
    ///
    /// Callers must pass roots they resolved with [`UnionFind::find`].
    ///
    /// # Panics
    /// If either argument is not a root.
    pub fn unite(&mut self, a: u16, b: u16) {
        assert!(
            self.parent[a as usize] == a && self.parent[b as usize] == b,
            "unite called on non-root cells ({a}, {b})"
        );
        self.parent[b as usize] = a;
    }
}

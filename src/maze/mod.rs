pub mod cell;

pub use cell::{Cell, Direction};

use crate::generators;

/// A perfect maze over a `width x height` grid of cells.
///
/// Cells live in a flat row-major arena (`index = y * width + x`) and carry
/// their wall-open flags directly, so the traversable graph needs no edge
/// objects after construction. The open-wall subgraph is always a spanning
/// tree: connected, acyclic, exactly `width * height - 1` open adjacencies.
pub struct Maze {
    cells: Vec<Cell>,
    width: u8,
    height: u8,
    seed: u64,
}

impl Maze {
    /// Builds a maze by carving a randomized minimum spanning tree.
    ///
    /// All randomness derives from a single generator seeded with `seed`, so
    /// the same `(width, height, seed)` triple always reproduces an identical
    /// maze.
    ///
    /// # Panics
    /// If `width` or `height` is zero; no partial grid is ever returned.
    pub fn build(width: u8, height: u8, seed: u64) -> Self {
        assert!(
            width > 0 && height > 0,
            "maze dimensions must be at least 1x1, got {width}x{height}"
        );
        let mut rng = generators::get_rng(seed);
        let cells = generators::carve(width, height, &mut rng);
        Maze {
            cells,
            width,
            height,
            seed,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of cells in the maze.
    pub fn total_cells(&self) -> u16 {
        self.width as u16 * self.height as u16
    }

    /// Top-left corner, where every race starts.
    pub fn start(&self) -> (u8, u8) {
        (0, 0)
    }

    /// Bottom-right corner, the race goal.
    pub fn goal(&self) -> (u8, u8) {
        (self.width - 1, self.height - 1)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub(crate) fn ravel_index(&self, coord: (u8, u8)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Cells reachable from `coord` through an open wall.
    ///
    /// Yields in the fixed [`Direction::ALL`] order, which keeps search
    /// expansion deterministic for a given maze.
    pub fn open_neighbors(&self, coord: (u8, u8)) -> impl Iterator<Item = (u8, u8)> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            if !self[coord].is_open(dir) {
                return None;
            }
            let next = dir.step(coord);
            self.is_in_bounds(next).then_some(next)
        })
    }

    /// Re-carves the maze from the stored seed and clears every per-cell
    /// visited/on-path flag. Wall flags come out identical to the original
    /// build.
    pub fn reset(&mut self) {
        let mut rng = generators::get_rng(self.seed);
        self.cells = generators::carve(self.width, self.height, &mut rng);
    }
}

impl std::ops::Index<(u8, u8)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<(u8, u8)> for Maze {
    fn index_mut(&mut self, index: (u8, u8)) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every cell reachable from (0, 0) through open walls.
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.total_cells() as usize];
        let mut pending = vec![(0u8, 0u8)];
        seen[0] = true;
        let mut count = 0;
        while let Some(coord) = pending.pop() {
            count += 1;
            for next in maze.open_neighbors(coord) {
                let idx = maze.ravel_index(next);
                if !seen[idx] {
                    seen[idx] = true;
                    pending.push(next);
                }
            }
        }
        count
    }

    fn open_adjacencies(maze: &Maze) -> usize {
        // Count east/south only so each undirected adjacency counts once.
        let mut open = 0;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                if maze[(x, y)].east {
                    open += 1;
                }
                if maze[(x, y)].south {
                    open += 1;
                }
            }
        }
        open
    }

    #[test]
    fn open_walls_form_a_spanning_tree() {
        for (width, height, seed) in [(2, 2, 425), (10, 6, 425), (1, 8, 7), (8, 1, 7), (40, 20, 1)]
        {
            let maze = Maze::build(width, height, seed);
            let total = maze.total_cells() as usize;
            assert_eq!(
                open_adjacencies(&maze),
                total - 1,
                "{width}x{height} seed {seed}"
            );
            assert_eq!(reachable_cells(&maze), total, "{width}x{height} seed {seed}");
        }
    }

    #[test]
    fn wall_flags_are_mirrored_between_neighbors() {
        let maze = Maze::build(10, 6, 425);
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                if x + 1 < maze.width() {
                    assert_eq!(maze[(x, y)].east, maze[(x + 1, y)].west);
                }
                if y + 1 < maze.height() {
                    assert_eq!(maze[(x, y)].south, maze[(x, y + 1)].north);
                }
            }
        }
    }

    #[test]
    fn same_seed_builds_identical_mazes() {
        let a = Maze::build(10, 6, 425);
        let b = Maze::build(10, 6, 425);
        for y in 0..a.height() {
            for x in 0..a.width() {
                assert_eq!(a[(x, y)], b[(x, y)]);
            }
        }
    }

    #[test]
    fn reset_reproduces_walls_and_clears_search_flags() {
        let mut maze = Maze::build(10, 6, 425);
        let before: Vec<Cell> = (0..maze.height())
            .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
            .map(|c| maze[c])
            .collect();

        maze[(3, 2)].visited = true;
        maze[(3, 2)].on_path = true;
        maze.reset();

        for (i, coord) in (0..maze.height())
            .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
            .enumerate()
        {
            let cell = maze[coord];
            assert!(!cell.visited);
            assert!(!cell.on_path);
            assert_eq!(cell.north, before[i].north);
            assert_eq!(cell.south, before[i].south);
            assert_eq!(cell.east, before[i].east);
            assert_eq!(cell.west, before[i].west);
        }
    }

    #[test]
    fn single_cell_maze_has_no_openings() {
        let maze = Maze::build(1, 1, 0);
        let cell = maze[(0, 0)];
        assert!(!cell.north && !cell.south && !cell.east && !cell.west);
        assert_eq!(maze.start(), maze.goal());
    }

    #[test]
    fn bounds_checks() {
        let maze = Maze::build(5, 5, 0);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_width_is_rejected() {
        Maze::build(0, 5, 0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_height_is_rejected() {
        Maze::build(5, 0, 0);
    }
}

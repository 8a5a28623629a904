/// Cardinal direction from a cell toward one of its four potential neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the fixed scan order used both when drawing
    /// candidate edge weights and when expanding neighbors. Changing this
    /// order changes which maze a seed produces.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Coordinate one step away in this direction.
    ///
    /// NOTE: This way of handling underflow/overflow is overflow-safe.
    /// When x < 1 or y < 1, wrap x - 1 or y - 1 to u8::MAX and let the
    /// caller's bounds check filter it out. When x + 1 or y + 1 would exceed
    /// u8::MAX, saturate to u8::MAX, which the bounds check also filters out
    /// (the largest cell index numerically possible is u8::MAX - 1, while the
    /// largest dimension numerically possible is u8::MAX).
    pub fn step(self, (x, y): (u8, u8)) -> (u8, u8) {
        match self {
            Direction::West => (x.wrapping_sub(1), y),
            Direction::East => (x.saturating_add(1), y),
            Direction::North => (x, y.wrapping_sub(1)),
            Direction::South => (x, y.saturating_add(1)),
        }
    }
}

/// One maze cell.
///
/// The four wall-open flags are fixed once generation finishes; `visited` and
/// `on_path` belong to a search run and are cleared by [`crate::Maze::reset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Open passage toward the cell above (smaller y)?
    pub north: bool,
    /// Open passage toward the cell below (larger y)?
    pub south: bool,
    /// Open passage toward the cell to the right (larger x)?
    pub east: bool,
    /// Open passage toward the cell to the left (smaller x)?
    pub west: bool,
    /// Has a search expanded this cell?
    pub visited: bool,
    /// Is this cell on the reconstructed start-goal path?
    pub on_path: bool,
}

impl Cell {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub(crate) fn set_open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::East => self.east = true,
            Direction::West => self.west = true,
        }
    }
}

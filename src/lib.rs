//! Perfect-maze construction and a step-at-a-time BFS/DFS race.
//!
//! [`Maze::build`] carves a spanning tree over a grid with randomized
//! Kruskal's algorithm; [`Race`] runs breadth-first and depth-first searches
//! from the top-left to the bottom-right corner, one frontier expansion per
//! [`Race::step`] call, so a rendering collaborator can animate progress one
//! tick at a time.

mod generators;
pub mod maze;
mod race;
pub mod solvers;

pub use maze::{Cell, Direction, Maze};
pub use race::Race;
pub use solvers::{Search, SearchState, Step, Strategy};

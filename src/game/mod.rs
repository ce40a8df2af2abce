//! # Game Module
//!
//! Core game state: the dungeon aggregate, its grid of cells, and the player.
//!
//! This module contains the fundamental building blocks of Delve:
//! - Grid coordinates and cardinal directions
//! - Cells, their passages, and the treasure they hold
//! - The player and the treasure it has collected
//! - The dungeon aggregate tying generation and play together

pub mod cell;
pub mod dungeon;
pub mod grid;
pub mod player;

pub use cell::*;
pub use dungeon::*;
pub use grid::*;
pub use player::*;

use serde::{Deserialize, Serialize};

/// A cell position in the dungeon grid.
///
/// Rows grow downward (south), columns grow rightward (east). Both are
/// zero-based and never negative.
///
/// # Examples
///
/// ```
/// use delve::Coord;
///
/// let coord = Coord::new(2, 3);
/// assert_eq!(coord.row, 2);
/// assert_eq!(coord.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The four cardinal directions a passage can lead in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the direction leading back the way this one came.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Direction;
    ///
    /// assert_eq!(Direction::North.inverse(), Direction::South);
    /// assert_eq!(Direction::East.inverse(), Direction::West);
    /// ```
    pub fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Converts a direction to a `(row, col)` delta.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

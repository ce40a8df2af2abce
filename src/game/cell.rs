//! # Cells and Treasure
//!
//! A cell is one location in the dungeon grid. Every cell knows its id, its
//! grid coordinate, the directions a player can leave it in, and the treasure
//! lying in it. A cell with exactly two exits is a tunnel; every other cell
//! is a cave. Only caves can hold treasure.

use crate::{Coord, Direction};
use serde::{Deserialize, Serialize};

/// The kinds of treasure a cave can hold.
///
/// A cave holds a bag of treasure instances, so the same kind can appear
/// more than once in one cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treasure {
    Ruby,
    Diamond,
    Sapphire,
}

impl Treasure {
    /// All treasure kinds, in a fixed order.
    pub const ALL: [Treasure; 3] = [Treasure::Ruby, Treasure::Diamond, Treasure::Sapphire];
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Treasure::Ruby => "ruby",
            Treasure::Diamond => "diamond",
            Treasure::Sapphire => "sapphire",
        };
        write!(f, "{}", name)
    }
}

/// One location in the dungeon grid.
///
/// Cells are created once when the grid is built. Generation fills in the
/// traversable directions and treasure; play removes treasure as the player
/// collects it. The id is row-major: `row * columns + col`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    id: usize,
    coord: Coord,
    moves: Vec<Direction>,
    treasures: Vec<Treasure>,
}

impl Cell {
    /// Creates a cell with no passages and no treasure.
    pub fn new(id: usize, coord: Coord) -> Self {
        Self {
            id,
            coord,
            moves: Vec::new(),
            treasures: Vec::new(),
        }
    }

    /// The row-major id of this cell.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The directions a player can move in from this cell.
    pub fn possible_moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Whether `direction` leads out of this cell.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.moves.contains(&direction)
    }

    /// The treasure currently lying in this cell.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// A cell with exactly two exits is a tunnel; all others are caves.
    ///
    /// The classification is derived from the passage list on every call,
    /// never cached.
    pub fn is_tunnel(&self) -> bool {
        self.moves.len() == 2
    }

    pub(crate) fn set_moves(&mut self, moves: Vec<Direction>) {
        self.moves = moves;
    }

    pub(crate) fn add_treasures(&mut self, treasures: Vec<Treasure>) {
        self.treasures.extend(treasures);
    }

    /// Removes every treasure instance whose kind appears in `kinds` and
    /// returns the removed instances. Kinds not present are ignored.
    pub(crate) fn remove_treasures(&mut self, kinds: &[Treasure]) -> Vec<Treasure> {
        let mut taken = Vec::new();
        self.treasures.retain(|treasure| {
            if kinds.contains(treasure) {
                taken.push(*treasure);
                false
            } else {
                true
            }
        });
        taken
    }
}

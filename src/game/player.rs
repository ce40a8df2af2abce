//! # Player
//!
//! The explorer walking the dungeon. The player tracks its current cell by
//! id (the dungeon owns the cells themselves) and a running count of every
//! treasure kind it has collected.

use crate::{DelveError, DelveResult, Treasure};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The player exploring the dungeon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cell_id: usize,
    collected: HashMap<Treasure, u32>,
}

impl Player {
    /// Creates a player at the given cell with zero of every treasure kind.
    ///
    /// Fails when `name` is empty.
    pub fn new(name: &str, cell_id: usize) -> DelveResult<Self> {
        if name.is_empty() {
            return Err(DelveError::InvalidConfig(
                "Player name cannot be empty".to_string(),
            ));
        }
        let collected = Treasure::ALL.iter().map(|&kind| (kind, 0)).collect();
        Ok(Self {
            name: name.to_string(),
            cell_id,
            collected,
        })
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id of the cell the player currently stands in.
    pub fn cell_id(&self) -> usize {
        self.cell_id
    }

    /// How many of each treasure kind the player has collected.
    ///
    /// Every kind is present, even at count zero.
    pub fn collected_treasures(&self) -> &HashMap<Treasure, u32> {
        &self.collected
    }

    /// How many of one treasure kind the player has collected.
    pub fn collected_count(&self, kind: Treasure) -> u32 {
        self.collected.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn relocate(&mut self, cell_id: usize) {
        self.cell_id = cell_id;
    }

    pub(crate) fn record_treasures(&mut self, treasures: &[Treasure]) {
        for treasure in treasures {
            *self.collected.entry(*treasure).or_insert(0) += 1;
        }
    }
}

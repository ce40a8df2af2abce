//! # Dungeon
//!
//! The aggregate tying everything together: the grid of cells, the accepted
//! passages, the start and destination caves, and the player. Construction
//! runs the whole generation pipeline in one shot; afterwards the dungeon
//! answers movement, collection, and query calls.

use crate::generation::{place_treasures, DungeonConfig, Edge, PassageGenerator};
use crate::random::RandomSource;
use crate::{config, Cell, DelveError, DelveResult, Direction, Grid, Player, Treasure};
use log::debug;
use std::collections::HashSet;

/// A fully generated dungeon with a player inside it.
///
/// Invariants held from construction on: every cell is reachable from every
/// other cell, and the start and destination caves lie at least
/// [`config::MIN_START_DESTINATION_DISTANCE`] moves apart.
#[derive(Debug)]
pub struct Dungeon {
    grid: Grid,
    passages: HashSet<Edge>,
    start: usize,
    end: usize,
    player: Player,
}

impl Dungeon {
    /// Generates a dungeon from validated parameters.
    ///
    /// The pipeline consumes the random source in a fixed order: spanning
    /// tree, interconnectivity, treasure, then start/destination search. A
    /// deterministic source therefore reproduces the exact same dungeon.
    ///
    /// # Errors
    ///
    /// [`DelveError::InvalidConfig`] when `config` fails validation, and
    /// [`DelveError::GenerationFailed`] when no cave pair lies far enough
    /// apart for a start and destination.
    pub fn new(config: &DungeonConfig, rng: &mut dyn RandomSource) -> DelveResult<Self> {
        config.validate()?;
        debug!(
            "generating {}x{} dungeon (wrapping: {}, interconnectivity: {})",
            config.rows, config.columns, config.wrapping, config.interconnectivity
        );

        let mut grid = Grid::new(config.rows, config.columns, config.wrapping);
        let generator = PassageGenerator::new(
            config.rows,
            config.columns,
            config.wrapping,
            config.interconnectivity,
        );
        let passages = generator.generate(rng).edge_set();
        grid.assign_moves(&passages);
        place_treasures(&mut grid, config.treasure_percentage, rng);

        let (start, end) = select_endpoints(&grid, rng)?;
        debug!("start cave {}, destination cave {}", start, end);
        let player = Player::new(&config.player_name, start)?;

        Ok(Self {
            grid,
            passages,
            start,
            end,
            player,
        })
    }

    /// The grid of cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The accepted passages of the dungeon.
    pub fn passages(&self) -> &HashSet<Edge> {
        &self.passages
    }

    /// The player exploring the dungeon.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The cell the player currently stands in.
    pub fn player_cell(&self) -> &Cell {
        self.grid.cell(self.player.cell_id())
    }

    /// The randomly chosen start cave.
    pub fn start_cell(&self) -> &Cell {
        self.grid.cell(self.start)
    }

    /// The randomly chosen destination cave.
    pub fn destination_cell(&self) -> &Cell {
        self.grid.cell(self.end)
    }

    /// Whether the player currently stands in the destination cave.
    pub fn is_destination_reached(&self) -> bool {
        self.player.cell_id() == self.end
    }

    /// Moves the player one step.
    ///
    /// The target cell is computed straight from the player's coordinate and
    /// the direction's delta (modulo the grid size when wrapping), so a move
    /// is O(1). Fails without changing any state when the current cell has
    /// no passage in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> DelveResult<()> {
        let current = self.grid.cell(self.player.cell_id());
        if !current.can_move(direction) {
            return Err(DelveError::InvalidMove(format!(
                "No passage {} out of cell {}",
                direction,
                current.id()
            )));
        }
        let target = self.grid.step(current.coord(), direction).ok_or_else(|| {
            DelveError::InvalidMove(format!(
                "No passage {} out of cell {}",
                direction,
                current.id()
            ))
        })?;
        let target_id = self.grid.index(target);
        self.player.relocate(target_id);
        Ok(())
    }

    /// Collects every treasure in the player's current cell.
    pub fn collect_all_treasures(&mut self) {
        self.collect_treasures(&Treasure::ALL);
    }

    /// Collects the treasures of the given kinds from the player's current
    /// cell.
    ///
    /// Kinds with no instance in the cell are silently ignored; an empty
    /// kind list is a valid no-op.
    pub fn collect_treasures(&mut self, kinds: &[Treasure]) {
        let cell = self.grid.cell_mut(self.player.cell_id());
        let taken = cell.remove_treasures(kinds);
        self.player.record_treasures(&taken);
    }
}

/// Draws random source caves until one admits a destination at least the
/// minimum distance away.
fn select_endpoints(grid: &Grid, rng: &mut dyn RandomSource) -> DelveResult<(usize, usize)> {
    let mut sources = grid.cave_ids();
    while !sources.is_empty() {
        let index = rng.next_in(0, sources.len());
        let source = sources.remove(index);
        if let Some(destination) = select_destination(grid, source, rng) {
            return Ok((source, destination));
        }
    }
    Err(DelveError::GenerationFailed(
        "Dungeon too small or interconnected! No cave pair lies at least five moves apart"
            .to_string(),
    ))
}

/// Draws random destination caves for `source`, accepting the first at the
/// minimum distance. The pool starts fresh (the source itself can be drawn
/// and rejected at distance zero).
fn select_destination(grid: &Grid, source: usize, rng: &mut dyn RandomSource) -> Option<usize> {
    let mut candidates = grid.cave_ids();
    while !candidates.is_empty() {
        let index = rng.next_in(0, candidates.len());
        let candidate = candidates.remove(index);
        let far_enough = grid
            .shortest_distance(source, candidate)
            .map_or(false, |distance| {
                distance >= config::MIN_START_DESTINATION_DISTANCE
            });
        if far_enough {
            return Some(candidate);
        }
    }
    None
}

//! # Dungeon Grid
//!
//! The grid owns every cell in the dungeon and concentrates all coordinate
//! arithmetic in one place: stepping to a neighbor (with wraparound on a
//! wrapping dungeon), deriving each cell's traversable directions from the
//! accepted edge set, and breadth-first shortest distances between cells.

use crate::generation::Edge;
use crate::{Cell, Coord, Direction};
use log::debug;
use std::collections::{HashSet, VecDeque};

/// A rectangular grid of cells, optionally wrapping at the edges.
///
/// Cells are stored row-major; a cell's id doubles as its index.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    wrapping: bool,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of empty cells with row-major ids.
    pub fn new(rows: usize, columns: usize, wrapping: bool) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                let id = row * columns + col;
                cells.push(Cell::new(id, Coord::new(row, col)));
            }
        }
        Self {
            rows,
            columns,
            wrapping,
            cells,
        }
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether edge cells are adjacent to the opposite edge.
    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row-major id for a coordinate.
    pub fn index(&self, coord: Coord) -> usize {
        coord.row * self.columns + coord.col
    }

    /// The cell with the given id.
    pub fn cell(&self, id: usize) -> &Cell {
        &self.cells[id]
    }

    /// The cell at the given coordinate.
    pub fn cell_at(&self, coord: Coord) -> &Cell {
        &self.cells[self.index(coord)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cell_mut(&mut self, id: usize) -> &mut Cell {
        &mut self.cells[id]
    }

    /// Ids of all non-tunnel cells, in row-major order.
    pub fn cave_ids(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_tunnel())
            .map(Cell::id)
            .collect()
    }

    /// The coordinate one step from `coord` in `direction`.
    ///
    /// On a wrapping grid the step wraps modulo the grid size; otherwise a
    /// step off the edge returns `None`.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = coord.row as isize + dr;
        let col = coord.col as isize + dc;

        if self.wrapping {
            let row = row.rem_euclid(self.rows as isize) as usize;
            let col = col.rem_euclid(self.columns as isize) as usize;
            Some(Coord::new(row, col))
        } else if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
        {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Derives each cell's traversable directions from the accepted edges.
    ///
    /// A direction is traversable exactly when the edge between the cell and
    /// its geometric neighbor in that direction was accepted. Because edges
    /// are unordered, the result is symmetric: a passage east out of one cell
    /// is a passage west out of the other.
    pub fn assign_moves(&mut self, edges: &HashSet<Edge>) {
        for id in 0..self.cells.len() {
            let coord = self.cells[id].coord();
            let mut moves = Vec::new();
            for direction in Direction::ALL {
                if let Some(neighbor) = self.step(coord, direction) {
                    let neighbor_id = self.index(neighbor);
                    if edges.contains(&Edge::between(id, neighbor_id)) {
                        moves.push(direction);
                    }
                }
            }
            self.cells[id].set_moves(moves);
        }
        debug!(
            "resolved passages for {} cells ({} caves)",
            self.cells.len(),
            self.cave_ids().len()
        );
    }

    /// Shortest hop distance from `source` to `target` along passages.
    ///
    /// Breadth-first search over the traversable directions; `None` means the
    /// target cannot be reached. After generation every cell is reachable, so
    /// `None` only appears on graphs built by hand.
    pub fn shortest_distance(&self, source: usize, target: usize) -> Option<usize> {
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();

        queue.push_back((source, 0));
        visited[source] = true;

        while let Some((id, distance)) = queue.pop_front() {
            if id == target {
                return Some(distance);
            }
            let cell = &self.cells[id];
            for direction in Direction::ALL {
                if !cell.can_move(direction) {
                    continue;
                }
                if let Some(neighbor) = self.step(cell.coord(), direction) {
                    let neighbor_id = self.index(neighbor);
                    if !visited[neighbor_id] {
                        visited[neighbor_id] = true;
                        queue.push_back((neighbor_id, distance + 1));
                    }
                }
            }
        }
        None
    }
}

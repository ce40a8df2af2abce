//! # Passage Graph Construction
//!
//! Builds the edge set of the dungeon: every physically adjacent cell pair
//! is a candidate, a randomized Kruskal pass picks a spanning tree out of
//! them, and an interconnectivity pass folds a requested number of rejected
//! candidates back in to create cycles.

use crate::random::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An unordered pair of cell ids connected by a passage.
///
/// Equality is symmetric: the edge between `a` and `b` is the same edge as
/// the one between `b` and `a`. The constructor normalizes the endpoint
/// order so derived equality and hashing honor that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// The edge between two cells, in either endpoint order.
    pub fn between(x: usize, y: usize) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Both endpoints, smaller id first.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Disjoint-set forest over cell ids, used while building the spanning tree.
///
/// `find` compresses paths iteratively; `union` attaches by rank. The
/// structure only lives for the duration of one generation pass.
#[derive(Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Representative of `i`'s set, repointing the walked chain at the root.
    pub(crate) fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The lower-rank root is attached under the higher-rank root; on a tie
    /// `y`'s root goes under `x`'s root and `x`'s root gains a rank.
    pub(crate) fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }
}

/// The accepted passages of a dungeon, split by how they were chosen.
#[derive(Debug, Clone)]
pub struct PassageSet {
    /// Spanning-tree edges; always `rows * columns - 1` of them.
    pub tree: Vec<Edge>,
    /// Extra edges added by the interconnectivity pass.
    pub extras: Vec<Edge>,
}

impl PassageSet {
    /// Every accepted edge as a set, for adjacency lookups.
    pub fn edge_set(&self) -> HashSet<Edge> {
        self.tree.iter().chain(self.extras.iter()).copied().collect()
    }

    /// Total number of accepted edges.
    pub fn len(&self) -> usize {
        self.tree.len() + self.extras.len()
    }

    /// Whether no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty() && self.extras.is_empty()
    }
}

/// Builds the passage graph for one dungeon.
///
/// With a deterministic [`RandomSource`] the accepted edge set is fully
/// reproducible: candidates are enumerated in a fixed order and consumed in
/// the exact sequence the source dictates.
#[derive(Debug, Clone)]
pub struct PassageGenerator {
    rows: usize,
    columns: usize,
    wrapping: bool,
    interconnectivity: usize,
}

impl PassageGenerator {
    /// Creates a generator for a grid of the given shape.
    pub fn new(rows: usize, columns: usize, wrapping: bool, interconnectivity: usize) -> Self {
        Self {
            rows,
            columns,
            wrapping,
            interconnectivity,
        }
    }

    /// Every candidate edge of the grid.
    ///
    /// Interior cells contribute an edge to their right and bottom
    /// neighbors, followed by a last-row and a last-column sweep. A wrapping
    /// grid additionally pairs the first and last column of every row, then
    /// the first and last row of every column.
    pub fn candidate_edges(&self) -> Vec<Edge> {
        let id = |row: usize, col: usize| row * self.columns + col;
        let mut edges = Vec::new();

        for i in 0..self.rows - 1 {
            for j in 0..self.columns - 1 {
                edges.push(Edge::between(id(i, j), id(i, j + 1)));
                edges.push(Edge::between(id(i, j), id(i + 1, j)));
            }
        }
        for j in 0..self.columns - 1 {
            edges.push(Edge::between(id(self.rows - 1, j), id(self.rows - 1, j + 1)));
        }
        for i in 0..self.rows - 1 {
            edges.push(Edge::between(id(i, self.columns - 1), id(i + 1, self.columns - 1)));
        }

        if self.wrapping {
            for i in 0..self.rows {
                edges.push(Edge::between(id(i, 0), id(i, self.columns - 1)));
            }
            for j in 0..self.columns {
                edges.push(Edge::between(id(0, j), id(self.rows - 1, j)));
            }
        }
        edges
    }

    /// Runs the randomized Kruskal pass and the interconnectivity pass.
    ///
    /// Candidates are drawn uniformly at random; an edge joining two
    /// different components is accepted into the tree, any other goes to a
    /// leftover pile. Once the tree is complete, `interconnectivity` more
    /// edges are drawn from the leftovers, falling back to the untouched
    /// candidates when the pile runs dry. Validation caps interconnectivity
    /// at the number of spare edges, so both running out at once is a bug.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> PassageSet {
        let cells = self.rows * self.columns;
        let mut candidates = self.candidate_edges();
        debug!(
            "building passages over {} cells from {} candidates",
            cells,
            candidates.len()
        );

        let mut tree = Vec::with_capacity(cells - 1);
        let mut leftovers = Vec::new();
        let mut sets = DisjointSet::new(cells);

        while tree.len() < cells - 1 && candidates.len() > 1 {
            let index = rng.next_in(0, candidates.len());
            let edge = candidates.remove(index);
            let (a, b) = edge.endpoints();
            if sets.find(a) != sets.find(b) {
                sets.union(a, b);
                tree.push(edge);
            } else {
                leftovers.push(edge);
            }
        }

        let mut extras = Vec::with_capacity(self.interconnectivity);
        for _ in 0..self.interconnectivity {
            if leftovers.is_empty() {
                assert!(
                    !candidates.is_empty(),
                    "interconnectivity exceeds the spare edges of the grid"
                );
                let index = rng.next_in(0, candidates.len());
                extras.push(candidates.remove(index));
            } else {
                let index = rng.next_in(0, leftovers.len());
                extras.push(leftovers.remove(index));
            }
        }

        debug!(
            "accepted {} tree edges and {} extra edges",
            tree.len(),
            extras.len()
        );
        PassageSet { tree, extras }
    }
}

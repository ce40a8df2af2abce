//! # Delve
//!
//! A grid dungeon crawler built on guaranteed-connected random mazes.
//!
//! ## Architecture Overview
//!
//! The crate is split along the same seams the game itself has:
//!
//! - **Game State**: the dungeon aggregate, its cells, and the player
//! - **Generation System**: randomized spanning-tree construction with
//!   configurable interconnectivity and treasure placement
//! - **Random System**: an injected uniform-integer source, swappable
//!   between OS entropy, a seeded sequence, and a fixed low-bias stream
//! - **Rendering System**: text rendering of the grid for terminal play
//!
//! Every dungeon is fully connected by construction: a randomized Kruskal
//! pass builds a spanning tree over the grid, then `interconnectivity`
//! extra edges are folded back in to open up alternate routes. The start
//! and destination caves are always at least five moves apart.

pub mod game;
pub mod generation;
pub mod random;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use random::*;
pub use rendering::*;

/// Core error type for the Delve engine.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Construction parameters are invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation could not satisfy its constraints
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Move cannot be performed from the current cell
    #[error("Invalid move: {0}")]
    InvalidMove(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Minimum value of `rows + columns` for a wrapping dungeon
    pub const MIN_DIMENSION_SUM_WRAPPING: usize = 7;

    /// Minimum value of `rows + columns` for a non-wrapping dungeon
    pub const MIN_DIMENSION_SUM_NON_WRAPPING: usize = 9;

    /// Minimum shortest-path distance between the start and destination caves
    pub const MIN_START_DESTINATION_DISTANCE: usize = 5;

    /// Exclusive upper bound on treasures placed in a single cave
    pub const MAX_TREASURES_PER_CAVE: usize = 4;
}

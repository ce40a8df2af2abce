//! # Rendering Module
//!
//! Text rendering of the dungeon grid for terminal play. Rendering only
//! reads game state; all the information it draws (passages, markers,
//! classification letters) comes straight from the core types.

pub mod display;

pub use display::*;

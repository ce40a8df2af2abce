//! # Generation Module
//!
//! Procedural construction of the dungeon: configuration and validation,
//! the passage graph (spanning tree plus interconnectivity), and treasure
//! placement.

pub mod graph;
pub mod treasure;

pub use graph::*;
pub use treasure::*;

use crate::config;
use crate::{DelveError, DelveResult};
use serde::{Deserialize, Serialize};

/// Construction parameters for one dungeon.
///
/// Validation runs before any generation: a dungeon that is too small, over
/// its interconnectivity cap, or given a bad treasure percentage or player
/// name is rejected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Extra edges to add beyond the spanning tree
    pub interconnectivity: usize,
    /// Whether edge cells are adjacent to the opposite edge
    pub wrapping: bool,
    /// Percentage of caves that receive treasure, in `[0, 100]`
    pub treasure_percentage: f64,
    /// Name of the exploring player
    pub player_name: String,
}

impl DungeonConfig {
    /// Creates a configuration. Call [`validate`](Self::validate) before use.
    pub fn new(
        rows: usize,
        columns: usize,
        interconnectivity: usize,
        wrapping: bool,
        treasure_percentage: f64,
        player_name: &str,
    ) -> Self {
        Self {
            rows,
            columns,
            interconnectivity,
            wrapping,
            treasure_percentage,
            player_name: player_name.to_string(),
        }
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// The largest interconnectivity the grid can honor: the number of
    /// candidate edges left over once the spanning tree has taken its
    /// `cells - 1`.
    pub fn max_interconnectivity(&self) -> usize {
        let cells = self.cell_count();
        let candidates = if self.wrapping {
            2 * cells
        } else {
            2 * cells - self.rows - self.columns
        };
        candidates - (cells - 1)
    }

    /// Checks every construction constraint, in a fixed order: grid size,
    /// interconnectivity cap, treasure percentage, player name.
    pub fn validate(&self) -> DelveResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(DelveError::InvalidConfig(
                "Rows and columns must both be positive".to_string(),
            ));
        }
        let minimum_sum = if self.wrapping {
            config::MIN_DIMENSION_SUM_WRAPPING
        } else {
            config::MIN_DIMENSION_SUM_NON_WRAPPING
        };
        if self.rows + self.columns < minimum_sum {
            return Err(DelveError::InvalidConfig(
                "Too small dungeon. Increase number of rows and/or columns".to_string(),
            ));
        }
        if self.interconnectivity > self.max_interconnectivity() {
            return Err(DelveError::InvalidConfig(format!(
                "Interconnectivity {} exceeds the maximum of {} for this grid",
                self.interconnectivity,
                self.max_interconnectivity()
            )));
        }
        if !(0.0..=100.0).contains(&self.treasure_percentage) {
            return Err(DelveError::InvalidConfig(
                "Treasure percentage must be between 0 and 100".to_string(),
            ));
        }
        if self.player_name.is_empty() {
            return Err(DelveError::InvalidConfig(
                "Player name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, columns: usize, interconnectivity: usize, wrapping: bool) -> DungeonConfig {
        DungeonConfig::new(rows, columns, interconnectivity, wrapping, 25.0, "Nishtha")
    }

    #[test]
    fn test_valid_configurations() {
        assert!(config(6, 4, 4, false).validate().is_ok());
        assert!(config(4, 4, 0, true).validate().is_ok());
        assert!(config(5, 4, 12, false).validate().is_ok());
        assert!(config(6, 4, 25, true).validate().is_ok());
    }

    #[test]
    fn test_dimension_sum_non_wrapping() {
        // 4 + 4 = 8 < 9.
        assert!(config(4, 4, 4, false).validate().is_err());
        assert!(config(5, 4, 4, false).validate().is_ok());
    }

    #[test]
    fn test_dimension_sum_wrapping() {
        // 2 + 4 = 6 < 7.
        assert!(config(2, 4, 0, true).validate().is_err());
        assert!(config(3, 4, 0, true).validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(config(0, 9, 0, false).validate().is_err());
        assert!(config(9, 0, 0, false).validate().is_err());
    }

    #[test]
    fn test_interconnectivity_cap_non_wrapping() {
        // 5x4: 31 candidates, 19 tree edges, 12 spare.
        assert_eq!(config(5, 4, 0, false).max_interconnectivity(), 12);
        assert!(config(5, 4, 12, false).validate().is_ok());
        assert!(config(5, 4, 13, false).validate().is_err());
    }

    #[test]
    fn test_interconnectivity_cap_wrapping() {
        // 4x4 torus: 32 candidates, 15 tree edges, 17 spare.
        assert_eq!(config(4, 4, 0, true).max_interconnectivity(), 17);
        assert!(config(4, 4, 17, true).validate().is_ok());
        assert!(config(4, 4, 18, true).validate().is_err());
        // 6x4 torus: 48 candidates, 23 tree edges, 25 spare.
        assert_eq!(config(6, 4, 0, true).max_interconnectivity(), 25);
    }

    #[test]
    fn test_treasure_percentage_bounds() {
        let mut bad = config(5, 4, 4, false);
        bad.treasure_percentage = -25.0;
        assert!(bad.validate().is_err());
        bad.treasure_percentage = 101.0;
        assert!(bad.validate().is_err());
        bad.treasure_percentage = 0.0;
        assert!(bad.validate().is_ok());
        bad.treasure_percentage = 100.0;
        assert!(bad.validate().is_ok());
    }

    #[test]
    fn test_empty_player_name_rejected() {
        let mut bad = config(5, 4, 4, false);
        bad.player_name = String::new();
        assert!(bad.validate().is_err());
    }
}

//! # Map Display
//!
//! Draws the full grid as text, three lines per grid row: passages north and
//! south show as `|`, passages east and west as `---`, and every cell as a
//! bracketed marker. The player takes marker precedence over the start cave,
//! which takes precedence over the destination; every other cell shows its
//! classification letter (`T` for tunnels, `C` for caves).

use crate::{Cell, Direction, Dungeon};
use std::fmt;

/// The marker letter for one cell.
fn glyph(dungeon: &Dungeon, cell: &Cell) -> char {
    if cell.id() == dungeon.player_cell().id() {
        'P'
    } else if cell.id() == dungeon.start_cell().id() {
        'S'
    } else if cell.id() == dungeon.destination_cell().id() {
        'D'
    } else if cell.is_tunnel() {
        'T'
    } else {
        'C'
    }
}

/// Renders the whole grid as text.
///
/// Wall segments are implicit: a missing `|` or `---` between two cells
/// means no passage connects them.
pub fn render_map(dungeon: &Dungeon) -> String {
    let grid = dungeon.grid();
    let mut out = String::new();

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let cell = grid.cell(row * grid.columns() + col);
            if cell.can_move(Direction::North) {
                out.push_str("     |     ");
            } else {
                out.push_str("           ");
            }
        }
        out.push('\n');

        for col in 0..grid.columns() {
            let cell = grid.cell(row * grid.columns() + col);
            if cell.can_move(Direction::West) {
                out.push_str("--- ");
            } else {
                out.push_str("    ");
            }
            out.push('[');
            out.push(glyph(dungeon, cell));
            out.push(']');
            if cell.can_move(Direction::East) {
                out.push_str(" ---");
            } else {
                out.push_str("    ");
            }
        }
        out.push('\n');

        for col in 0..grid.columns() {
            let cell = grid.cell(row * grid.columns() + col);
            if cell.can_move(Direction::South) {
                out.push_str("     |     ");
            } else {
                out.push_str("           ");
            }
        }
        out.push('\n');
    }

    out
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_map(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MinRandom;
    use crate::DungeonConfig;

    fn fixture_dungeon() -> Dungeon {
        let config = DungeonConfig::new(6, 4, 4, false, 25.0, "Nishtha");
        Dungeon::new(&config, &mut MinRandom).unwrap()
    }

    #[test]
    fn test_map_dimensions() {
        let dungeon = fixture_dungeon();
        let map = render_map(&dungeon);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 6 * 3);
        for line in lines {
            assert_eq!(line.len(), 4 * 11);
        }
    }

    #[test]
    fn test_player_marker_precedes_start_marker() {
        let dungeon = fixture_dungeon();
        let map = render_map(&dungeon);
        // The player starts on the start cave, so P shows and S does not.
        assert!(map.contains("[P]"));
        assert!(!map.contains("[S]"));
        assert!(map.contains("[D]"));
    }

    #[test]
    fn test_start_marker_appears_once_player_leaves() {
        let mut dungeon = fixture_dungeon();
        dungeon.move_player(crate::Direction::South).unwrap();
        let map = render_map(&dungeon);
        assert!(map.contains("[S]"));
        assert!(map.contains("[P]"));
    }

    #[test]
    fn test_display_matches_render() {
        let dungeon = fixture_dungeon();
        assert_eq!(dungeon.to_string(), render_map(&dungeon));
    }

    #[test]
    fn test_passage_bars_are_symmetric() {
        let dungeon = fixture_dungeon();
        let map = render_map(&dungeon);
        let lines: Vec<&str> = map.lines().collect();
        // The line below one grid row equals the line above the next: both
        // render the same set of vertical passages.
        for row in 0..5 {
            assert_eq!(lines[row * 3 + 2], lines[(row + 1) * 3]);
        }
    }
}

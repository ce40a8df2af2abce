//! Golden-layout regression tests.
//!
//! With the fixed low-bias random source the whole generation pipeline is
//! deterministic, so these tests pin entire dungeons down to the byte: the
//! accepted passages, the start and destination caves, and the rendered map.

use delve::{render_map, Direction, DelveError, Dungeon, DungeonConfig, MinRandom, Treasure};

fn fixed_dungeon(
    rows: usize,
    columns: usize,
    interconnectivity: usize,
    wrapping: bool,
) -> Dungeon {
    let config = DungeonConfig::new(
        rows,
        columns,
        interconnectivity,
        wrapping,
        25.0,
        "Nishtha",
    );
    Dungeon::new(&config, &mut MinRandom).unwrap()
}

#[test]
fn non_wrapping_fixture_map() {
    let dungeon = fixed_dungeon(6, 4, 4, false);
    let expected = concat!(
        "                                            \n",
        "    [T] ------ [P] ------ [C] ------ [C]    \n",
        "     |          |          |                \n",
        "     |          |          |                \n",
        "    [C] ------ [C] ------ [C] ------ [C]    \n",
        "     |          |          |                \n",
        "     |          |          |                \n",
        "    [C] ------ [C] ------ [C] ------ [C]    \n",
        "     |          |          |                \n",
        "     |          |          |                \n",
        "    [T]        [T]        [C] ------ [D]    \n",
        "     |          |          |                \n",
        "     |          |          |                \n",
        "    [T]        [T]        [C] ------ [C]    \n",
        "     |          |          |                \n",
        "     |          |          |                \n",
        "    [C]        [C]        [T] ------ [C]    \n",
        "                                            \n",
    );
    assert_eq!(render_map(&dungeon), expected);
}

#[test]
fn non_wrapping_fixture_endpoints() {
    let dungeon = fixed_dungeon(6, 4, 4, false);
    assert_eq!(dungeon.start_cell().id(), 1);
    assert_eq!(dungeon.destination_cell().id(), 15);
    assert_eq!(dungeon.player_cell().id(), 1);
}

#[test]
fn non_wrapping_fixture_places_ruby_at_start() {
    let dungeon = fixed_dungeon(6, 4, 4, false);
    assert_eq!(dungeon.player_cell().treasures(), &[Treasure::Ruby]);
}

#[test]
fn max_interconnectivity_fixture_map() {
    // At the cap every candidate edge is accepted, so only the four corners
    // stay tunnels.
    let dungeon = fixed_dungeon(5, 4, 12, false);
    let expected = concat!(
        "                                            \n",
        "    [T] ------ [P] ------ [C] ------ [T]    \n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "    [C] ------ [C] ------ [C] ------ [C]    \n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "    [C] ------ [C] ------ [C] ------ [C]    \n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "    [C] ------ [C] ------ [C] ------ [D]    \n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "    [T] ------ [C] ------ [C] ------ [T]    \n",
        "                                            \n",
    );
    assert_eq!(render_map(&dungeon), expected);
    assert_eq!(dungeon.start_cell().id(), 1);
    assert_eq!(dungeon.destination_cell().id(), 15);
}

#[test]
fn max_interconnectivity_fixture_walk() {
    let mut dungeon = fixed_dungeon(5, 4, 12, false);
    let route = [
        Direction::South,
        Direction::South,
        Direction::South,
        Direction::East,
        Direction::East,
    ];
    for direction in route {
        dungeon.move_player(direction).unwrap();
    }
    assert!(dungeon.is_destination_reached());
}

#[test]
fn wrapping_fixture_map() {
    // A fully interconnected torus: every cell keeps all four passages.
    let dungeon = fixed_dungeon(6, 4, 25, true);
    let expected = concat!(
        "     |          |          |          |     \n",
        "--- [P] ------ [C] ------ [C] ------ [C] ---\n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "--- [C] ------ [C] ------ [C] ------ [C] ---\n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "--- [C] ------ [C] ------ [C] ------ [C] ---\n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "--- [C] ------ [C] ------ [D] ------ [C] ---\n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "--- [C] ------ [C] ------ [C] ------ [C] ---\n",
        "     |          |          |          |     \n",
        "     |          |          |          |     \n",
        "--- [C] ------ [C] ------ [C] ------ [C] ---\n",
        "     |          |          |          |     \n",
    );
    assert_eq!(render_map(&dungeon), expected);
    assert_eq!(dungeon.start_cell().id(), 0);
    assert_eq!(dungeon.destination_cell().id(), 14);
}

#[test]
fn wrapping_fixture_walk_crosses_edges() {
    let mut dungeon = fixed_dungeon(6, 4, 25, true);
    let route = [
        Direction::North,
        Direction::North,
        Direction::North,
        Direction::East,
        Direction::East,
    ];
    for direction in route {
        dungeon.move_player(direction).unwrap();
    }
    assert!(dungeon.is_destination_reached());
    assert_eq!(dungeon.player_cell().id(), 14);
}

#[test]
fn undersized_non_wrapping_dungeon_is_rejected() {
    let config = DungeonConfig::new(4, 4, 4, false, 25.0, "Nishtha");
    assert!(matches!(
        Dungeon::new(&config, &mut MinRandom),
        Err(DelveError::InvalidConfig(_))
    ));
}

#[test]
fn undersized_wrapping_dungeon_is_rejected() {
    let config = DungeonConfig::new(2, 4, 0, true, 25.0, "Nishtha");
    assert!(matches!(
        Dungeon::new(&config, &mut MinRandom),
        Err(DelveError::InvalidConfig(_))
    ));
}

#[test]
fn over_cap_interconnectivity_is_rejected() {
    let non_wrapping = DungeonConfig::new(5, 4, 13, false, 25.0, "Nishtha");
    assert!(Dungeon::new(&non_wrapping, &mut MinRandom).is_err());

    let wrapping = DungeonConfig::new(4, 4, 18, true, 25.0, "Nishtha");
    assert!(Dungeon::new(&wrapping, &mut MinRandom).is_err());
}

#[test]
fn bad_treasure_percentage_is_rejected() {
    for percentage in [-25.0, 101.0] {
        let config = DungeonConfig::new(5, 4, 12, false, percentage, "Nishtha");
        assert!(Dungeon::new(&config, &mut MinRandom).is_err());
    }
}

#[test]
fn empty_player_name_is_rejected() {
    let config = DungeonConfig::new(5, 4, 12, false, 25.0, "");
    assert!(Dungeon::new(&config, &mut MinRandom).is_err());
}

//! # Delve Main Entry Point
//!
//! Builds a dungeon from command-line parameters and sends the player on a
//! random walk through it, collecting treasure along the way, until the
//! destination cave is reached.

use clap::Parser;
use delve::{render_map, source_for, DelveResult, Dungeon, DungeonConfig, RandomSource, Treasure};
use log::info;

/// Command line arguments for Delve.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "A grid dungeon crawler built on guaranteed-connected random mazes")]
#[command(version)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 6)]
    columns: usize,

    /// Extra passages beyond the spanning tree
    #[arg(long, default_value_t = 0)]
    interconnectivity: usize,

    /// Make edge cells adjacent to the opposite edge
    #[arg(long)]
    wrapping: bool,

    /// Percentage of caves that receive treasure
    #[arg(long, default_value_t = 25.0)]
    treasure_percentage: f64,

    /// Name of the exploring player
    #[arg(long, default_value = "Explorer")]
    player_name: String,

    /// Random seed for a replayable dungeon
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use the fixed low-bias source and only print the layout
    #[arg(long)]
    predictable: bool,

    /// Print a JSON summary of the dungeon instead of playing
    #[arg(long)]
    json: bool,
}

fn main() -> DelveResult<()> {
    env_logger::init();
    let args = Args::parse();

    info!("Starting Delve v{}", delve::VERSION);

    let config = DungeonConfig::new(
        args.rows,
        args.columns,
        args.interconnectivity,
        args.wrapping,
        args.treasure_percentage,
        &args.player_name,
    );
    let mut rng = source_for(args.predictable, args.seed);
    let mut dungeon = Dungeon::new(&config, rng.as_mut())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary(&dungeon, &config))?);
        return Ok(());
    }

    println!("Welcome to the World of Dungeon");
    println!("{}", render_map(&dungeon));

    if args.predictable {
        // The low-bias source would walk the player back and forth forever;
        // predictable mode is for inspecting layouts, not playing them.
        println!(
            "Start cave: {}, destination cave: {}",
            dungeon.start_cell().id(),
            dungeon.destination_cell().id()
        );
        return Ok(());
    }

    walk_to_destination(&mut dungeon, rng.as_mut())
}

/// Random-walks the player until it stands in the destination cave.
fn walk_to_destination(dungeon: &mut Dungeon, rng: &mut dyn RandomSource) -> DelveResult<()> {
    dungeon.collect_all_treasures();
    print_collected(dungeon);

    while !dungeon.is_destination_reached() {
        let moves = dungeon.player_cell().possible_moves().to_vec();
        let direction = moves[rng.next_in(0, moves.len())];
        dungeon.move_player(direction)?;

        println!();
        println!("{} moved {}", dungeon.player().name(), direction);
        let coord = dungeon.player_cell().coord();
        println!("Current location in grid: {},{}", coord.row, coord.col);
        dungeon.collect_all_treasures();
        print_collected(dungeon);
        println!("{}", render_map(dungeon));
    }

    println!("Destination reached!!");
    Ok(())
}

fn print_collected(dungeon: &Dungeon) {
    let counts: Vec<String> = Treasure::ALL
        .iter()
        .map(|&kind| format!("{}: {}", kind, dungeon.player().collected_count(kind)))
        .collect();
    println!("Collected treasures: {}", counts.join(", "));
}

/// A machine-readable snapshot of the dungeon for the `--json` flag.
fn summary(dungeon: &Dungeon, config: &DungeonConfig) -> serde_json::Value {
    let caves = dungeon.grid().cave_ids();
    let collected: serde_json::Map<String, serde_json::Value> = Treasure::ALL
        .iter()
        .map(|&kind| {
            (
                kind.to_string(),
                dungeon.player().collected_count(kind).into(),
            )
        })
        .collect();

    serde_json::json!({
        "config": config,
        "start": dungeon.start_cell().id(),
        "destination": dungeon.destination_cell().id(),
        "caves": caves.len(),
        "tunnels": dungeon.grid().len() - caves.len(),
        "player": {
            "name": dungeon.player().name(),
            "cell": dungeon.player_cell().id(),
            "collected": collected,
        },
    })
}

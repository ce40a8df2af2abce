//! # Treasure Placement
//!
//! Scatters treasure over a percentage of the caves. Tunnels never hold
//! treasure, and each treasured cave is drawn without replacement.

use crate::config;
use crate::random::RandomSource;
use crate::{Grid, Treasure};
use log::debug;

/// Places treasure in `percentage` percent of the caves, rounded down.
///
/// Each selected cave receives between one and three treasures, each of an
/// independently drawn kind. The draw order per cave is fixed (count, then
/// kinds, then which cave), so a deterministic source reproduces the same
/// placement every time.
pub fn place_treasures(grid: &mut Grid, percentage: f64, rng: &mut dyn RandomSource) {
    let mut caves = grid.cave_ids();
    let treasured = (caves.len() as f64 * percentage / 100.0) as usize;
    debug!("placing treasure in {} of {} caves", treasured, caves.len());

    for _ in 0..treasured {
        let mut stash = Vec::new();
        let count = rng.next_in(1, config::MAX_TREASURES_PER_CAVE);
        for _ in 0..count {
            stash.push(Treasure::ALL[rng.next_in(0, Treasure::ALL.len())]);
        }
        let index = rng.next_in(0, caves.len());
        let cave_id = caves.remove(index);
        grid.cell_mut(cave_id).add_treasures(stash);
    }
}

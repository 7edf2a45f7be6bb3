use std::collections::BTreeSet;

use crate::types::{RoomSpec, Tile};

use super::super::grid::{center_tile, in_room, round_half_up};

/// Tiles swept by a square brush traced from every door tile to the room's
/// center tile. Floor pieces are kept off these so visitors can walk in.
pub fn corridor_tiles(
    door_tiles: &[Tile],
    room: RoomSpec,
    corridor_width: u32,
    steps: u32,
) -> BTreeSet<Tile> {
    let center = center_tile(room);
    let reach = (corridor_width / 2) as i32;
    let mut blacklist = BTreeSet::new();

    for door in door_tiles {
        for step in 0..=steps {
            let t = if steps == 0 { 0.0 } else { f64::from(step) / f64::from(steps) };
            let x = round_half_up(f64::from(door.x) + t * f64::from(center.x - door.x)) as i32;
            let z = round_half_up(f64::from(door.z) + t * f64::from(center.z - door.z)) as i32;
            for dx in -reach..=reach {
                for dz in -reach..=reach {
                    let tile = Tile { x: x + dx, z: z + dz };
                    if in_room(room, tile) {
                        blacklist.insert(tile);
                    }
                }
            }
        }
    }
    blacklist
}

//! Floor-standing groups laid out along an inner ring inset from the walls.
//!
//! The ring's four sides behave like walls: the same run search applies, with
//! the door-to-center corridors blocked so the walking lanes stay clear.

use std::collections::BTreeSet;

use rand_chacha::rand_core::Rng;

use crate::inventory::ArtifactGroup;
use crate::types::{Direction, RoomSpec, Tile};

use super::super::model::{Placement, PlacementAnchor};
use super::wall::{SideRun, WallOccupancy, place_on_sides};

/// Slot occupancy for the ring `padding` tiles in from every wall.
///
/// Ring rows sit at `z = padding` and `z = depth - 1 - padding`, ring columns at
/// `x = padding` and `x = width - 1 - padding`; slot `i` of a side is the tile
/// `padding + i` along it.
pub fn ring_occupancy(room: RoomSpec, padding: u32, corridor: &BTreeSet<Tile>) -> WallOccupancy {
    let along_x = room.width.saturating_sub(2 * padding) as usize;
    let along_z = room.depth.saturating_sub(2 * padding) as usize;
    if along_x == 0 || along_z == 0 {
        return WallOccupancy::new(0, 0);
    }
    let mut occupancy = WallOccupancy::new(along_x, along_z);

    let padding = padding as i32;
    let north_row = padding;
    let south_row = room.depth as i32 - 1 - padding;
    let west_column = padding;
    let east_column = room.width as i32 - 1 - padding;
    for tile in corridor {
        if tile.z == north_row {
            occupancy.block(Direction::North, i64::from(tile.x - padding));
        }
        if tile.z == south_row {
            occupancy.block(Direction::South, i64::from(tile.x - padding));
        }
        if tile.x == west_column {
            occupancy.block(Direction::West, i64::from(tile.z - padding));
        }
        if tile.x == east_column {
            occupancy.block(Direction::East, i64::from(tile.z - padding));
        }
    }
    occupancy.block_corners();
    occupancy
}

pub fn place_ring_groups<R: Rng + ?Sized>(
    groups: &[ArtifactGroup],
    occupancy: &mut WallOccupancy,
    room: RoomSpec,
    padding: u32,
    tile_size: f32,
    rng: &mut R,
) -> (Vec<Placement>, Vec<ArtifactGroup>) {
    let outcome = place_on_sides(groups, occupancy, tile_size, rng, |run, max_depth| {
        ring_position(room, padding, run, max_depth, tile_size)
    });
    (outcome.placed, outcome.unplaced)
}

fn ring_position(
    room: RoomSpec,
    padding: u32,
    run: SideRun,
    max_depth: f32,
    tile_size: f32,
) -> (PlacementAnchor, [f32; 3]) {
    let padding = padding as f32;
    let inner_half_width = (room.width as f32 / 2.0 - padding) * tile_size;
    let inner_half_depth = (room.depth as f32 / 2.0 - padding) * tile_size;
    let along = (run.start as f32 + run.length as f32 / 2.0) * tile_size;
    let position = match run.side {
        Direction::North => [-inner_half_width + along, 0.0, -inner_half_depth + max_depth / 2.0],
        Direction::South => [-inner_half_width + along, 0.0, inner_half_depth - max_depth / 2.0],
        Direction::East => [inner_half_width - max_depth / 2.0, 0.0, -inner_half_depth + along],
        Direction::West => [-inner_half_width + max_depth / 2.0, 0.0, -inner_half_depth + along],
    };
    let anchor = PlacementAnchor::Ring { side: run.side, start: run.start, length: run.length };
    (anchor, position)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::inventory::{Artifact, ArtifactDimensions};
    use crate::museum::placement::corridor::corridor_tiles;

    fn floor_group(id: u32, width: f32) -> ArtifactGroup {
        ArtifactGroup::singleton(Artifact {
            id,
            name: format!("plinth {id}"),
            model_path: String::new(),
            group: None,
            starred: false,
            on_wall: false,
            dimensions: ArtifactDimensions::new(width, 1.0, 1.0),
        })
    }

    #[test]
    fn ring_is_inset_and_has_blocked_corners() {
        let occupancy = ring_occupancy(RoomSpec::new(13, 15), 3, &BTreeSet::new());
        assert_eq!(occupancy.side(Direction::North).len(), 7);
        assert_eq!(occupancy.side(Direction::East).len(), 9);
        assert!(occupancy.is_blocked(Direction::North, 0));
        assert!(occupancy.is_blocked(Direction::North, 6));
        assert!(!occupancy.is_blocked(Direction::North, 3));
    }

    #[test]
    fn corridor_blocks_ring_slots_it_crosses() {
        let room = RoomSpec::new(13, 13);
        let corridor = corridor_tiles(&[Tile { x: 6, z: 0 }], room, 2, 100);
        let occupancy = ring_occupancy(room, 3, &corridor);
        // The lane covers x = 5..=7 on the north ring row z = 3.
        for index in 2..=4 {
            assert!(occupancy.is_blocked(Direction::North, index));
        }
        assert!(!occupancy.is_blocked(Direction::North, 1));
        assert!(!occupancy.is_blocked(Direction::South, 3));
    }

    #[test]
    fn tiny_rooms_have_no_ring() {
        let occupancy = ring_occupancy(RoomSpec::new(5, 13), 3, &BTreeSet::new());
        assert!(occupancy.side(Direction::North).is_empty());
        assert!(occupancy.free_runs(Direction::East, 1).is_empty());
    }

    #[test]
    fn ring_groups_stay_inside_the_inset() {
        let room = RoomSpec::new(17, 17);
        let mut occupancy = ring_occupancy(room, 3, &BTreeSet::new());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let groups: Vec<ArtifactGroup> = (0..4).map(|id| floor_group(id, 1.0)).collect();
        let (placed, unplaced) =
            place_ring_groups(&groups, &mut occupancy, room, 3, 1.0, &mut rng);
        assert!(unplaced.is_empty());
        for placement in placed {
            let [x, _, z] = placement.position;
            assert!(x.abs() <= 5.5 && z.abs() <= 5.5, "{:?}", placement.position);
            assert!(!placement.is_wall);
        }
    }
}

//! Artifact placement inside one room.
//!
//! Starred groups go to the center templates, wall-mounted groups to the outer
//! walls, and the remaining floor groups to the inner ring. Placement is best
//! effort: a group with no room anywhere is dropped and reported.

pub mod center;
pub mod corridor;
pub mod ring;
pub mod wall;

use std::f32::consts::{FRAC_PI_2, PI};

use log::{debug, warn};
use rand_chacha::rand_core::Rng;

use crate::config::LayoutConfig;
use crate::inventory::ArtifactGroup;
use crate::types::{Direction, RoomSpec, Tile};

use super::model::Placement;
use center::place_center_artifacts;
use corridor::corridor_tiles;
use ring::{place_ring_groups, ring_occupancy};
use wall::{WallOccupancy, place_wall_groups};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomPlacements {
    pub placements: Vec<Placement>,
    /// Keys of groups that found no free run.
    pub dropped: Vec<String>,
}

pub fn place_artifacts_in_room<R: Rng + ?Sized>(
    groups: &[ArtifactGroup],
    room: RoomSpec,
    door_tiles: &[Tile],
    config: &LayoutConfig,
    rng: &mut R,
) -> RoomPlacements {
    let tile_size = config.tile_size;
    let (starred, unstarred): (Vec<ArtifactGroup>, Vec<ArtifactGroup>) =
        groups.iter().cloned().partition(ArtifactGroup::has_starred);
    let (wall_groups, mut floor_groups): (Vec<ArtifactGroup>, Vec<ArtifactGroup>) =
        unstarred.into_iter().partition(ArtifactGroup::all_on_wall);

    let center = place_center_artifacts(&starred, config.center_spacing);
    if !center.overflow.is_empty() {
        debug!("{} starred pieces overflow the center templates", center.overflow.len());
    }
    floor_groups.extend(center.overflow.into_iter().map(ArtifactGroup::singleton));

    let mut walls = WallOccupancy::for_room(room, door_tiles, config.label_offsets);
    let (mut placements, mut dropped) =
        place_wall_groups(&wall_groups, &mut walls, room, tile_size, rng);

    let corridor =
        corridor_tiles(door_tiles, room, config.corridor_width, config.corridor_steps);
    let mut ring = ring_occupancy(room, config.ring_padding, &corridor);
    let (ring_placed, ring_unplaced) =
        place_ring_groups(&floor_groups, &mut ring, room, config.ring_padding, tile_size, rng);

    // Floor groups the ring cannot hold still get a chance against the walls.
    let (fallback_placed, fallback_unplaced) =
        place_wall_groups(&ring_unplaced, &mut walls, room, tile_size, rng);

    placements.extend(center.placed);
    placements.extend(ring_placed);
    placements.extend(fallback_placed);
    dropped.extend(fallback_unplaced);

    for group in &dropped {
        warn!(
            "dropping group '{}' ({} pieces, {:.2} wide) in room {}x{}: no free run",
            group.key,
            group.members.len(),
            group.total_width(),
            room.width,
            room.depth
        );
    }
    debug!("placed {} groups in room {}x{}", placements.len(), room.width, room.depth);

    RoomPlacements { placements, dropped: dropped.into_iter().map(|group| group.key).collect() }
}

/// Yaw that turns a piece to face `direction`; zero faces south (+z).
pub fn facing_rotation(direction: Direction) -> f32 {
    match direction {
        Direction::South => 0.0,
        Direction::North => PI,
        Direction::East => FRAC_PI_2,
        Direction::West => -FRAC_PI_2,
    }
}

/// Whole tiles a group spans side by side; `None` for unmeasurable groups and
/// for groups wider than any room side could be.
fn tiles_needed(group: &ArtifactGroup, tile_size: f32) -> Option<usize> {
    let tiles = (group.total_width() / tile_size).ceil();
    (tiles.is_finite() && tiles >= 0.0 && tiles <= u32::MAX as f32)
        .then(|| (tiles as usize).max(1))
}

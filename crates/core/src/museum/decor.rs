//! Non-exhibit props: spotlight railings, doorway frames, corner plants, and
//! standing visitors. Positions are in the room-centered frame.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand_chacha::rand_core::Rng;

use crate::random::{chance, unit_f32};
use crate::types::{RoomSpec, Tile};

use super::doors::wall_containing;
use super::grid::tile_center_local;
use super::model::{DecorKind, DecorPlacement, RoomDoorInfo};
use super::placement::facing_rotation;

const RAILING_SPACING: u32 = 4;
const RAILING_MARGIN: u32 = 2;
const MIN_RAILING_STRIPES: u32 = 2;
const VISITOR_MARGIN: u32 = 3;
const MAX_VISITORS: u32 = 9;
const AREA_PER_VISITOR: u32 = 25;

pub fn place_decor<R: Rng + ?Sized>(
    room: RoomSpec,
    door_info: &RoomDoorInfo,
    tile_size: f32,
    rng: &mut R,
) -> Vec<DecorPlacement> {
    let mut decor = railings(room, tile_size);
    decor.extend(doorways(room, door_info, tile_size));
    decor.extend(plants(room, tile_size, rng));
    decor.extend(visitors(room, tile_size, rng));
    decor
}

/// Parallel stripes of ceiling railings running along the longer axis.
fn railings(room: RoomSpec, tile_size: f32) -> Vec<DecorPlacement> {
    let along_width = room.width >= room.depth;
    let (length, across) =
        if along_width { (room.width, room.depth) } else { (room.depth, room.width) };
    let stripe_length = length.saturating_sub(2 * RAILING_MARGIN);
    let stripe_count = (across / RAILING_SPACING).max(MIN_RAILING_STRIPES);
    let span = ((stripe_count - 1) * RAILING_SPACING) as f32;
    let rotation_y = if along_width { 0.0 } else { FRAC_PI_2 };

    let mut railings = Vec::with_capacity((stripe_count * stripe_length) as usize);
    for stripe in 0..stripe_count {
        let offset = (-span / 2.0 + (stripe * RAILING_SPACING) as f32) * tile_size;
        for segment in 0..stripe_length {
            let along = (-(stripe_length as f32) / 2.0 + segment as f32) * tile_size;
            let position = if along_width { [along, 0.0, offset] } else { [offset, 0.0, along] };
            railings.push(DecorPlacement { kind: DecorKind::Railing, position, rotation_y });
        }
    }
    railings
}

/// One frame per door, centered on its middle tile and facing out of the room.
fn doorways(room: RoomSpec, door_info: &RoomDoorInfo, tile_size: f32) -> Vec<DecorPlacement> {
    [&door_info.entrance_tiles, &door_info.exit_tiles]
        .into_iter()
        .filter_map(|tiles| tiles.get(tiles.len() / 2).copied())
        .filter_map(|middle: Tile| {
            let wall = wall_containing(room, middle)?;
            let (x, z) = tile_center_local(room, middle, tile_size);
            Some(DecorPlacement {
                kind: DecorKind::Doorway,
                position: [x, 0.0, z],
                rotation_y: facing_rotation(wall),
            })
        })
        .collect()
}

/// Each corner independently holds a plant two times in three.
fn plants<R: Rng + ?Sized>(room: RoomSpec, tile_size: f32, rng: &mut R) -> Vec<DecorPlacement> {
    let half_x = (room.width as f32 - 1.0) / 2.0;
    let half_z = (room.depth as f32 - 1.0) / 2.0;
    let near_x = 0.5;
    let far_x = room.width as f32 - 1.5;
    let near_z = 0.5;
    let far_z = room.depth as f32 - 1.5;

    [(near_x, near_z), (far_x, near_z), (near_x, far_z), (far_x, far_z)]
        .into_iter()
        .filter(|_| chance(rng, 2, 3))
        .map(|(x, z)| DecorPlacement {
            kind: DecorKind::Plant,
            position: [(x - half_x) * tile_size, 0.0, (z - half_z) * tile_size],
            rotation_y: 0.0,
        })
        .collect()
}

/// Up to nine visitors scattered over the floor inside a three-tile margin.
fn visitors<R: Rng + ?Sized>(room: RoomSpec, tile_size: f32, rng: &mut R) -> Vec<DecorPlacement> {
    let usable_width = room.width.saturating_sub(2 * VISITOR_MARGIN);
    let usable_depth = room.depth.saturating_sub(2 * VISITOR_MARGIN);
    let count = (usable_width * usable_depth / AREA_PER_VISITOR).min(MAX_VISITORS);
    let half_x = room.width as f32 / 2.0;
    let half_z = room.depth as f32 / 2.0;
    let margin = VISITOR_MARGIN as f32;

    (0..count)
        .map(|_| {
            let x = unit_f32(rng) * usable_width as f32 + margin - half_x;
            let z = unit_f32(rng) * usable_depth as f32 + margin - half_z;
            DecorPlacement {
                kind: DecorKind::Visitor,
                position: [x * tile_size, 0.0, z * tile_size],
                rotation_y: unit_f32(rng) * TAU,
            }
        })
        .collect()
}

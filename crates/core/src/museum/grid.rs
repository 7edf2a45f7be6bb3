//! Conversions between the three coordinate frames used by the layout engine.
//!
//! - room-local tiles: integer `(x, z)` in `[0, width) × [0, depth)`
//! - room-centered floats: origin at the room center, in world units
//! - world: room positions are room centers; global tiles are shared by all rooms

use std::collections::BTreeSet;

use crate::types::{RoomSpec, Tile, WorldPos, WorldTile};

/// Rounds halves toward positive infinity so the same half-tile offset rounds
/// the same way on both sides of the origin.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Global tile covered by `tile` of a room centered on `center`.
pub fn tile_to_world_tile(
    center: WorldPos,
    room: RoomSpec,
    tile: Tile,
    tile_size: f32,
) -> WorldTile {
    let tile_size = f64::from(tile_size);
    let half_width = f64::from(room.width) / 2.0;
    let half_depth = f64::from(room.depth) / 2.0;
    WorldTile {
        x: round_half_up(f64::from(center.x) / tile_size + f64::from(tile.x) - half_width + 0.5),
        z: round_half_up(f64::from(center.z) / tile_size + f64::from(tile.z) - half_depth + 0.5),
    }
}

/// Every global tile a room covers, row by row.
pub fn room_footprint(
    center: WorldPos,
    room: RoomSpec,
    tile_size: f32,
) -> impl Iterator<Item = WorldTile> {
    (0..room.width as i32).flat_map(move |x| {
        (0..room.depth as i32)
            .map(move |z| tile_to_world_tile(center, room, Tile { x, z }, tile_size))
    })
}

/// Center of `tile` in the room-centered frame.
pub fn tile_center_local(room: RoomSpec, tile: Tile, tile_size: f32) -> (f32, f32) {
    let x = (tile.x as f32 + 0.5 - room.width as f32 / 2.0) * tile_size;
    let z = (tile.z as f32 + 0.5 - room.depth as f32 / 2.0) * tile_size;
    (x, z)
}

pub fn center_tile(room: RoomSpec) -> Tile {
    Tile { x: (room.width / 2) as i32, z: (room.depth / 2) as i32 }
}

pub(super) fn in_room(room: RoomSpec, tile: Tile) -> bool {
    tile.x >= 0 && tile.z >= 0 && (tile.x as u32) < room.width && (tile.z as u32) < room.depth
}

/// Text picture of a tile set, one row per `z`.
pub fn render_tile_map(tiles: &BTreeSet<Tile>, room: RoomSpec, marker: char) -> String {
    let mut output = String::with_capacity(((room.width + 1) * room.depth) as usize);
    for z in 0..room.depth as i32 {
        for x in 0..room.width as i32 {
            output.push(if tiles.contains(&Tile { x, z }) { marker } else { '.' });
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_treats_negative_halves_like_positive_ones() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.49), 0);
    }

    #[test]
    fn first_room_footprint_is_contiguous_block() {
        let room = RoomSpec::new(13, 13);
        let center = WorldPos { x: 6.5, z: 6.5 };
        let tiles: BTreeSet<WorldTile> = room_footprint(center, room, 1.0).collect();
        assert_eq!(tiles.len(), 169);
        assert!(tiles.contains(&WorldTile { x: 1, z: 1 }));
        assert!(tiles.contains(&WorldTile { x: 13, z: 13 }));
        assert!(!tiles.contains(&WorldTile { x: 0, z: 0 }));
    }

    #[test]
    fn tile_centers_are_symmetric_about_room_center() {
        let room = RoomSpec::new(13, 15);
        let (x0, z0) = tile_center_local(room, Tile { x: 0, z: 0 }, 1.0);
        let (x1, z1) = tile_center_local(room, Tile { x: 12, z: 14 }, 1.0);
        assert_eq!(x0, -x1);
        assert_eq!(z0, -z1);
        assert_eq!(tile_center_local(room, center_tile(room), 1.0), (0.0, 0.0));
    }

    #[test]
    fn tile_map_marks_requested_tiles() {
        let tiles = BTreeSet::from([Tile { x: 0, z: 0 }, Tile { x: 2, z: 1 }]);
        let map = render_tile_map(&tiles, RoomSpec::new(3, 2), '#');
        assert_eq!(map, "#..\n..#\n");
    }
}

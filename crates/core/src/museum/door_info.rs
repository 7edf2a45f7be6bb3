use crate::types::{RoomSpec, Tile};

use super::grid::center_tile;
use super::model::{DoorLink, RoomDoorInfo};

/// Entrance and exit summary for room `room_index` of a chained layout.
///
/// Tiles stay in the room-local frame. A missing side's midpoint collapses to
/// the center tile, which gives that side a rotation of zero.
pub fn compute_room_door_info(
    room_index: usize,
    room: RoomSpec,
    door_links: &[DoorLink],
) -> RoomDoorInfo {
    let entrance_tiles = room_index
        .checked_sub(1)
        .and_then(|previous| door_links.get(previous))
        .map(|link| link.doors.to.clone())
        .unwrap_or_default();
    let exit_tiles =
        door_links.get(room_index).map(|link| link.doors.from.clone()).unwrap_or_default();
    let all_door_tiles = entrance_tiles.iter().chain(&exit_tiles).copied().collect();

    let center = center_tile(room);
    let entrance_mid = midpoint(&entrance_tiles, center);
    let exit_mid = midpoint(&exit_tiles, center);

    RoomDoorInfo {
        entrance_rotation: rotation_toward(center, entrance_mid),
        exit_rotation: rotation_toward(center, exit_mid),
        entrance_tiles,
        exit_tiles,
        all_door_tiles,
        entrance_mid,
        exit_mid,
    }
}

fn midpoint(tiles: &[Tile], fallback: Tile) -> Tile {
    tiles.get(tiles.len() / 2).copied().unwrap_or(fallback)
}

/// Yaw from `from` toward `to`, zero pointing north (negative z).
fn rotation_toward(from: Tile, to: Tile) -> f32 {
    ((to.x - from.x) as f32).atan2((from.z - to.z) as f32)
}

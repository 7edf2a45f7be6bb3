//! Adjacent-room geometry: where the next room goes and which wall tiles
//! become the doorway on either side of the shared boundary.

use log::trace;

use crate::types::{Direction, RoomSpec, Tile, WorldPos};

use super::grid::tile_to_world_tile;
use super::model::DoorTiles;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NextRoomPosition {
    pub position: WorldPos,
    pub needs_correction: bool,
}

/// Center of `to` when it is attached to the `direction` side of `from`.
///
/// When the two rooms' widths (north/south) or depths (east/west) differ in
/// parity, the new room shifts half a tile along the shared wall so both
/// rooms' tile grids line up.
pub fn compute_next_room_position(
    from_pos: WorldPos,
    from: RoomSpec,
    to: RoomSpec,
    direction: Direction,
    tile_size: f32,
) -> NextRoomPosition {
    let half_from = from.extent_along(direction) as f32 / 2.0;
    let half_to = to.extent_along(direction) as f32 / 2.0;
    let along = (half_from + half_to) * tile_size;
    let mut position = match direction {
        Direction::North => WorldPos { x: from_pos.x, z: from_pos.z - along },
        Direction::East => WorldPos { x: from_pos.x + along, z: from_pos.z },
        Direction::South => WorldPos { x: from_pos.x, z: from_pos.z + along },
        Direction::West => WorldPos { x: from_pos.x - along, z: from_pos.z },
    };

    let needs_correction =
        from.extent_across(direction) % 2 != to.extent_across(direction) % 2;
    if needs_correction {
        if direction.is_north_south() {
            position.x -= tile_size / 2.0;
        } else {
            position.z -= tile_size / 2.0;
        }
    }

    NextRoomPosition { position, needs_correction }
}

/// Door tiles on both sides of a link, each list in its own room's frame.
pub fn compute_door_tiles(
    from: RoomSpec,
    to: RoomSpec,
    direction: Direction,
    needs_correction: bool,
    door_width: u32,
) -> DoorTiles {
    let across_from = from.extent_across(direction);
    let across_to = to.extent_across(direction);
    let from_start = centered_start(across_from, door_width);
    // An odd-sized room meeting an even one sits half a tile back, which moves
    // its centered door one tile forward once rounded.
    let to_start =
        centered_start(across_to, door_width) + i32::from(needs_correction && across_to % 2 == 1);

    let from_wall = wall_line(from, direction);
    let to_wall = wall_line(to, direction.opposite());

    let mut doors = DoorTiles::default();
    for offset in 0..door_width as i32 {
        doors.from.push(tile_on_wall(direction, from_wall, from_start + offset));
        doors.to.push(tile_on_wall(direction, to_wall, to_start + offset));
    }

    trace!(
        "door {direction} correction={needs_correction} from={:?} to={:?}",
        doors.from, doors.to
    );
    doors
}

/// Outer wall a tile sits on; north and south win over the side walls at corners.
pub fn wall_containing(room: RoomSpec, tile: Tile) -> Option<Direction> {
    if tile.z == 0 {
        Some(Direction::North)
    } else if tile.z == room.depth as i32 - 1 {
        Some(Direction::South)
    } else if tile.x == 0 {
        Some(Direction::West)
    } else if tile.x == room.width as i32 - 1 {
        Some(Direction::East)
    } else {
        None
    }
}

/// True when every `from` door tile sits directly across the boundary from the
/// matching `to` tile in global tile space.
pub fn doors_face_each_other(
    from_pos: WorldPos,
    from: RoomSpec,
    to_pos: WorldPos,
    to: RoomSpec,
    direction: Direction,
    doors: &DoorTiles,
    tile_size: f32,
) -> bool {
    let (step_x, step_z) = match direction {
        Direction::North => (0, -1),
        Direction::East => (1, 0),
        Direction::South => (0, 1),
        Direction::West => (-1, 0),
    };
    doors.from.len() == doors.to.len()
        && doors.from.iter().zip(&doors.to).all(|(&from_tile, &to_tile)| {
            let a = tile_to_world_tile(from_pos, from, from_tile, tile_size);
            let b = tile_to_world_tile(to_pos, to, to_tile, tile_size);
            b.x - a.x == step_x && b.z - a.z == step_z
        })
}

fn centered_start(extent: u32, door_width: u32) -> i32 {
    (extent / 2) as i32 - (door_width / 2) as i32
}

/// Fixed coordinate of the wall on the `side` of `room`.
fn wall_line(room: RoomSpec, side: Direction) -> i32 {
    match side {
        Direction::North | Direction::West => 0,
        Direction::South => room.depth as i32 - 1,
        Direction::East => room.width as i32 - 1,
    }
}

fn tile_on_wall(direction: Direction, wall: i32, along: i32) -> Tile {
    if direction.is_north_south() { Tile { x: along, z: wall } } else { Tile { x: wall, z: along } }
}

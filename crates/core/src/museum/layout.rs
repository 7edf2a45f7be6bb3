//! Greedy room chaining with full-sequence restarts.
//!
//! Each room is attached to a random free side of the previous one. A room
//! with no free side abandons the whole attempt; a fresh attempt reshuffles
//! every direction from the first link onward.

use log::{debug, info, warn};
use rand_chacha::rand_core::Rng;

use crate::config::LayoutConfig;
use crate::random::shuffle;
use crate::types::{Direction, LayoutError, RoomSpec, WorldPos};

use super::doors::{compute_door_tiles, compute_next_room_position};
use super::interior_wall::compute_interior_wall;
use super::model::{DoorLink, MuseumLayout};
use super::occupancy::OccupancyTracker;

pub fn generate_room_layout<R: Rng + ?Sized>(
    rooms: &[RoomSpec],
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<MuseumLayout, LayoutError> {
    validate_rooms(rooms)?;
    let max_attempts = config.max_attempts.max(1);

    let mut layout = retry_placement(max_attempts, rooms.len(), |attempt| {
        debug!("layout attempt {attempt}/{max_attempts} for {} rooms", rooms.len());
        place_rooms(rooms, config, rng)
    })?;

    layout.interior_walls =
        rooms.iter().map(|&room| compute_interior_wall(room, config)).collect();
    Ok(layout)
}

pub fn validate_rooms(rooms: &[RoomSpec]) -> Result<(), LayoutError> {
    if rooms.is_empty() {
        return Err(LayoutError::EmptyMuseum);
    }
    match rooms.iter().position(|room| room.width == 0 || room.depth == 0) {
        Some(room_index) => Err(LayoutError::InvalidRoomDimensions {
            room_index,
            width: rooms[room_index].width,
            depth: rooms[room_index].depth,
        }),
        None => Ok(()),
    }
}

/// Runs `attempt` until it yields a layout, at most `max_attempts` times.
pub(super) fn retry_placement<F>(
    max_attempts: u32,
    room_count: usize,
    mut attempt: F,
) -> Result<MuseumLayout, LayoutError>
where
    F: FnMut(u32) -> Option<MuseumLayout>,
{
    for attempt_number in 1..=max_attempts {
        match attempt(attempt_number) {
            Some(mut layout) => {
                info!("placed {room_count} rooms on attempt {attempt_number}/{max_attempts}");
                layout.attempts = attempt_number;
                return Ok(layout);
            }
            None => warn!("layout attempt {attempt_number}/{max_attempts} hit a dead end"),
        }
    }
    Err(LayoutError::PlacementExhausted { attempts: max_attempts, room_count })
}

/// One attempt. `None` when some room has no non-overlapping side.
fn place_rooms<R: Rng + ?Sized>(
    rooms: &[RoomSpec],
    config: &LayoutConfig,
    rng: &mut R,
) -> Option<MuseumLayout> {
    let tile_size = config.tile_size;
    let first = rooms[0];
    let mut current = WorldPos {
        x: first.width as f32 * tile_size / 2.0,
        z: first.depth as f32 * tile_size / 2.0,
    };

    let mut occupancy = OccupancyTracker::new(tile_size);
    occupancy.mark_tiles(current, first);

    let mut room_positions = vec![current];
    let mut door_links = Vec::with_capacity(rooms.len().saturating_sub(1));

    for (index, pair) in rooms.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let mut directions = Direction::ALL;
        shuffle(rng, &mut directions);

        let placed = directions.into_iter().find_map(|direction| {
            let next = compute_next_room_position(current, from, to, direction, tile_size);
            (!occupancy.would_overlap(next.position, to)).then_some((direction, next))
        });
        let Some((direction, next)) = placed else {
            debug!("room {} ({}x{}) has no free side", index + 1, to.width, to.depth);
            return None;
        };

        debug!(
            "room {} ({}x{}) placed {direction} of previous at ({}, {}) correction={}",
            index + 1,
            to.width,
            to.depth,
            next.position.x,
            next.position.z,
            next.needs_correction
        );

        let doors =
            compute_door_tiles(from, to, direction, next.needs_correction, config.door_width);
        door_links.push(DoorLink { direction, needs_correction: next.needs_correction, doors });
        room_positions.push(next.position);

        // The previous room is committed only after its successor passed the
        // overlap check against everything before it.
        occupancy.mark_tiles(current, from);
        current = next.position;
    }

    debug!("attempt committed {} tiles", occupancy.len());
    Some(MuseumLayout { room_positions, door_links, interior_walls: Vec::new(), attempts: 0 })
}

//! Append-only record of global tiles claimed by placed rooms.

use std::collections::BTreeSet;

use crate::types::{RoomSpec, WorldPos, WorldTile};

use super::grid::room_footprint;

#[derive(Clone, Debug)]
pub(super) struct OccupancyTracker {
    tiles: BTreeSet<WorldTile>,
    tile_size: f32,
}

impl OccupancyTracker {
    pub(super) fn new(tile_size: f32) -> Self {
        Self { tiles: BTreeSet::new(), tile_size }
    }

    pub(super) fn mark_tiles(&mut self, center: WorldPos, room: RoomSpec) {
        self.tiles.extend(room_footprint(center, room, self.tile_size));
    }

    pub(super) fn would_overlap(&self, center: WorldPos, room: RoomSpec) -> bool {
        room_footprint(center, room, self.tile_size).any(|tile| self.tiles.contains(&tile))
    }

    pub(super) fn len(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_room_overlaps_itself_but_not_its_neighbor() {
        let mut tracker = OccupancyTracker::new(1.0);
        let room = RoomSpec::new(13, 13);
        let center = WorldPos { x: 6.5, z: 6.5 };
        assert!(!tracker.would_overlap(center, room));

        tracker.mark_tiles(center, room);
        assert_eq!(tracker.len(), 169);
        assert!(tracker.would_overlap(center, room));
        assert!(tracker.would_overlap(WorldPos { x: 18.5, z: 6.5 }, room));
        assert!(!tracker.would_overlap(WorldPos { x: 19.5, z: 6.5 }, room));
    }

    #[test]
    fn marking_twice_does_not_grow_the_set() {
        let mut tracker = OccupancyTracker::new(1.0);
        let room = RoomSpec::new(5, 7);
        let center = WorldPos { x: 2.5, z: 3.5 };
        tracker.mark_tiles(center, room);
        tracker.mark_tiles(center, room);
        assert_eq!(tracker.len(), 35);
    }

    #[test]
    fn overlap_check_does_not_mutate() {
        let tracker = OccupancyTracker::new(1.0);
        let _ = tracker.would_overlap(WorldPos { x: 0.0, z: 0.0 }, RoomSpec::new(13, 13));
        assert_eq!(tracker.len(), 0);
    }
}

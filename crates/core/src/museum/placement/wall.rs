//! Per-side slot occupancy and the free-run search shared by the wall and ring
//! placers.

use rand_chacha::rand_core::Rng;

use crate::inventory::ArtifactGroup;
use crate::random::{random_index, shuffle};
use crate::types::{Direction, RoomSpec, Tile};

use super::super::doors::wall_containing;
use super::super::model::{Placement, PlacementAnchor};
use super::{facing_rotation, tiles_needed};

/// One boolean slot per tile along each side; `true` means unavailable.
///
/// Exactly one placer pass owns an occupancy value at a time. Claiming a run
/// also blocks the slot on each side of it, so later runs on the same side
/// always keep a gap of at least one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallOccupancy {
    north: Vec<bool>,
    east: Vec<bool>,
    south: Vec<bool>,
    west: Vec<bool>,
}

/// A run of slots claimed on one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideRun {
    pub side: Direction,
    pub start: usize,
    pub length: usize,
}

impl WallOccupancy {
    /// All slots free; north/south sides hold `along_x` slots, east/west `along_z`.
    pub fn new(along_x: usize, along_z: usize) -> Self {
        Self {
            north: vec![false; along_x],
            east: vec![false; along_z],
            south: vec![false; along_x],
            west: vec![false; along_z],
        }
    }

    /// Outer walls of `room` with corners, doors, door buffers, and the label
    /// slots beside each door blocked.
    pub fn for_room(room: RoomSpec, door_tiles: &[Tile], label_offsets: [u32; 2]) -> Self {
        let mut occupancy = Self::new(room.width as usize, room.depth as usize);
        occupancy.block_corners();

        for &tile in door_tiles {
            let Some(wall) = wall_containing(room, tile) else {
                continue;
            };
            let index = i64::from(if wall.is_north_south() { tile.x } else { tile.z });
            for offset in -1..=1 {
                occupancy.block(wall, index + offset);
            }
            // Labels hang on the visitor's left when walking in through the door.
            let sign = match wall {
                Direction::North | Direction::East => 1,
                Direction::South | Direction::West => -1,
            };
            for label_offset in label_offsets {
                occupancy.block(wall, index + sign * i64::from(label_offset));
            }
        }
        occupancy
    }

    pub fn side(&self, side: Direction) -> &[bool] {
        match side {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    fn side_mut(&mut self, side: Direction) -> &mut [bool] {
        match side {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }

    pub fn is_blocked(&self, side: Direction, index: usize) -> bool {
        self.side(side).get(index).copied().unwrap_or(true)
    }

    /// Blocks one slot; indices outside the side are ignored.
    pub fn block(&mut self, side: Direction, index: i64) {
        if let Some(slot) =
            usize::try_from(index).ok().and_then(|index| self.side_mut(side).get_mut(index))
        {
            *slot = true;
        }
    }

    pub fn block_corners(&mut self) {
        for side in Direction::ALL {
            let len = self.side(side).len() as i64;
            self.block(side, 0);
            self.block(side, len - 1);
        }
    }

    /// Start indices of every window of `length` free slots that touches
    /// neither end of the side.
    pub fn free_runs(&self, side: Direction, length: usize) -> Vec<usize> {
        let slots = self.side(side);
        if length == 0 || length.checked_add(2).is_none_or(|needed| slots.len() < needed) {
            return Vec::new();
        }
        let mut starts = Vec::new();
        let mut consecutive = 0;
        for (index, &blocked) in slots.iter().enumerate() {
            if blocked {
                consecutive = 0;
                continue;
            }
            consecutive += 1;
            if consecutive >= length {
                let start = index + 1 - length;
                if start != 0 && index != slots.len() - 1 {
                    starts.push(start);
                }
            }
        }
        starts
    }

    /// Marks `start..start + length` and one buffer slot on each side.
    pub fn claim(&mut self, side: Direction, start: usize, length: usize) {
        let first = start as i64 - 1;
        let last = (start + length) as i64;
        for index in first..=last {
            self.block(side, index);
        }
    }

    /// Tries the four sides in random order and claims a random qualifying run
    /// on the first side that has one.
    pub fn claim_random_run<R: Rng + ?Sized>(
        &mut self,
        length: usize,
        rng: &mut R,
    ) -> Option<SideRun> {
        let mut sides = Direction::ALL;
        shuffle(rng, &mut sides);
        for side in sides {
            let starts = self.free_runs(side, length);
            if starts.is_empty() {
                continue;
            }
            let start = starts[random_index(rng, starts.len())];
            self.claim(side, start, length);
            return Some(SideRun { side, start, length });
        }
        None
    }
}

/// Outcome of one pass over a list of groups.
#[derive(Debug, Default)]
pub(super) struct SidePlacement {
    pub(super) placed: Vec<Placement>,
    pub(super) unplaced: Vec<ArtifactGroup>,
}

/// Places groups flush against the outer walls, in input order.
pub fn place_wall_groups<R: Rng + ?Sized>(
    groups: &[ArtifactGroup],
    occupancy: &mut WallOccupancy,
    room: RoomSpec,
    tile_size: f32,
    rng: &mut R,
) -> (Vec<Placement>, Vec<ArtifactGroup>) {
    let outcome = place_on_sides(groups, occupancy, tile_size, rng, |run, max_depth| {
        wall_position(room, run, max_depth, tile_size)
    });
    (outcome.placed, outcome.unplaced)
}

pub(super) fn place_on_sides<R, F>(
    groups: &[ArtifactGroup],
    occupancy: &mut WallOccupancy,
    tile_size: f32,
    rng: &mut R,
    locate: F,
) -> SidePlacement
where
    R: Rng + ?Sized,
    F: Fn(SideRun, f32) -> (PlacementAnchor, [f32; 3]),
{
    let mut outcome = SidePlacement::default();
    for group in groups {
        let run = tiles_needed(group, tile_size)
            .and_then(|length| occupancy.claim_random_run(length, rng));
        match run {
            Some(run) => {
                let (anchor, position) = locate(run, group.max_depth());
                outcome.placed.push(Placement::new(
                    group.members.clone(),
                    position,
                    facing_rotation(run.side.opposite()),
                    anchor,
                ));
            }
            None => outcome.unplaced.push(group.clone()),
        }
    }
    outcome
}

fn wall_position(
    room: RoomSpec,
    run: SideRun,
    max_depth: f32,
    tile_size: f32,
) -> (PlacementAnchor, [f32; 3]) {
    let half_width = room.width as f32 / 2.0 * tile_size;
    let half_depth = room.depth as f32 / 2.0 * tile_size;
    let along = (run.start as f32 + run.length as f32 / 2.0) * tile_size;
    let position = match run.side {
        Direction::North => [-half_width + along, 0.0, -half_depth + max_depth / 2.0],
        Direction::South => [-half_width + along, 0.0, half_depth - max_depth / 2.0],
        Direction::East => [half_width - max_depth / 2.0, 0.0, -half_depth + along],
        Direction::West => [-half_width + max_depth / 2.0, 0.0, -half_depth + along],
    };
    let anchor = PlacementAnchor::Wall { wall: run.side, start: run.start, length: run.length };
    (anchor, position)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::inventory::{Artifact, ArtifactDimensions};

    fn blocked(occupancy: &WallOccupancy, side: Direction) -> Vec<usize> {
        occupancy
            .side(side)
            .iter()
            .enumerate()
            .filter_map(|(index, &blocked)| blocked.then_some(index))
            .collect()
    }

    fn group(id: u32, width: f32) -> ArtifactGroup {
        ArtifactGroup::singleton(Artifact {
            id,
            name: format!("piece {id}"),
            model_path: String::new(),
            group: None,
            starred: false,
            on_wall: true,
            dimensions: ArtifactDimensions::new(width, 0.4, 1.0),
        })
    }

    #[test]
    fn fresh_room_blocks_only_corners() {
        let occupancy = WallOccupancy::for_room(RoomSpec::new(13, 15), &[], [4, 5]);
        assert_eq!(blocked(&occupancy, Direction::North), [0, 12]);
        assert_eq!(blocked(&occupancy, Direction::East), [0, 14]);
    }

    #[test]
    fn north_door_blocks_buffer_and_labels_to_the_east() {
        let doors = [Tile { x: 5, z: 0 }, Tile { x: 6, z: 0 }, Tile { x: 7, z: 0 }];
        let occupancy = WallOccupancy::for_room(RoomSpec::new(17, 13), &doors, [4, 5]);
        assert_eq!(blocked(&occupancy, Direction::North), [0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 16]);
        assert_eq!(blocked(&occupancy, Direction::South), [0, 16]);
    }

    #[test]
    fn south_door_labels_fall_off_the_wall_when_out_of_range() {
        let doors = [Tile { x: 1, z: 12 }, Tile { x: 2, z: 12 }, Tile { x: 3, z: 12 }];
        let occupancy = WallOccupancy::for_room(RoomSpec::new(13, 13), &doors, [4, 5]);
        // Every label slot lands before index 0.
        assert_eq!(blocked(&occupancy, Direction::South), [0, 1, 2, 3, 4, 12]);
    }

    #[test]
    fn free_runs_skip_ends_and_blocked_slots() {
        let mut occupancy = WallOccupancy::new(8, 4);
        occupancy.block(Direction::North, 4);
        assert_eq!(occupancy.free_runs(Direction::North, 2), [1, 2, 5]);
        assert_eq!(occupancy.free_runs(Direction::North, 4), Vec::<usize>::new());
        assert_eq!(occupancy.free_runs(Direction::East, 2), [1]);
        assert_eq!(occupancy.free_runs(Direction::East, 3), Vec::<usize>::new());
        assert_eq!(occupancy.free_runs(Direction::North, usize::MAX), Vec::<usize>::new());
    }

    #[test]
    fn claimed_runs_carry_buffers() {
        let mut occupancy = WallOccupancy::new(10, 10);
        occupancy.claim(Direction::West, 3, 2);
        assert_eq!(blocked(&occupancy, Direction::West), [2, 3, 4, 5]);
        occupancy.claim(Direction::West, 0, 1);
        assert_eq!(blocked(&occupancy, Direction::West), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn wall_groups_face_into_the_room() {
        let room = RoomSpec::new(13, 13);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut occupancy = WallOccupancy::for_room(room, &[], [4, 5]);
        let groups: Vec<ArtifactGroup> = (0..8).map(|id| group(id, 1.6)).collect();
        let (placed, unplaced) =
            place_wall_groups(&groups, &mut occupancy, room, 1.0, &mut rng);
        assert_eq!(placed.len() + unplaced.len(), 8);
        assert!(!placed.is_empty());
        for placement in &placed {
            let PlacementAnchor::Wall { wall, start, length } = placement.anchor else {
                panic!("expected wall anchor");
            };
            assert_eq!(length, 2);
            assert!(start > 0 && start + length < 13);
            let expected = match wall {
                Direction::North => 0.0,
                Direction::South => PI,
                Direction::East => -FRAC_PI_2,
                Direction::West => FRAC_PI_2,
            };
            assert!((placement.rotation_y - expected).abs() < 1e-6);
            assert!(placement.is_wall);
        }
    }

    #[test]
    fn north_wall_position_hugs_the_wall() {
        let room = RoomSpec::new(13, 15);
        let run = SideRun { side: Direction::North, start: 2, length: 3 };
        let (_, position) = wall_position(room, run, 0.4, 1.0);
        assert_eq!(position, [-6.5 + 3.5, 0.0, -7.5 + 0.2]);
    }
}

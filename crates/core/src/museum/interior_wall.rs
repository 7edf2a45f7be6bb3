//! Optional partition wall across the middle of a large room.

use log::debug;

use crate::config::LayoutConfig;
use crate::types::{Direction, FacingTile, RoomSpec};

use super::model::InteriorWall;

/// Partition perpendicular to the room's shorter axis, centered on both axes.
///
/// The wall runs along X when `width >= depth`, else along Z. Its length is
/// `interior_wall_ratio` of the longest dimension, bumped by one when the
/// remainder would leave it off-center.
pub fn compute_interior_wall(room: RoomSpec, config: &LayoutConfig) -> InteriorWall {
    let longest = room.longest();
    if longest < config.interior_wall_min_size {
        debug!("room {}x{} too small for an interior wall", room.width, room.depth);
        return InteriorWall::default();
    }

    let mut length = (longest as f32 * config.interior_wall_ratio).floor() as u32;
    if (longest - length.min(longest)) % 2 != 0 {
        length += 1;
    }
    let length = length.min(longest);

    let mut wall = InteriorWall::default();
    if room.width >= room.depth {
        let z = centered_line(room.depth);
        let start = ((room.width - length) / 2) as i32;
        for x in start..start + length as i32 {
            wall.tiles.push(FacingTile { x, z, facing: Direction::South });
            wall.opposite_side_tiles.push(FacingTile { x, z: z + 1, facing: Direction::North });
        }
    } else {
        let x = centered_line(room.width);
        let start = ((room.depth - length) / 2) as i32;
        for z in start..start + length as i32 {
            wall.tiles.push(FacingTile { x, z, facing: Direction::East });
            wall.opposite_side_tiles.push(FacingTile { x: x + 1, z, facing: Direction::West });
        }
    }

    debug!("interior wall of {length} tiles for room {}x{}", room.width, room.depth);
    wall
}

fn centered_line(extent: u32) -> i32 {
    if extent % 2 == 0 { (extent / 2) as i32 - 1 } else { (extent / 2) as i32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_rooms_get_no_wall() {
        let wall = compute_interior_wall(RoomSpec::new(4, 3), &LayoutConfig::default());
        assert!(wall.is_empty());
        assert!(wall.opposite_side_tiles.is_empty());
    }

    #[test]
    fn square_room_gets_centered_horizontal_wall() {
        let wall = compute_interior_wall(RoomSpec::new(13, 13), &LayoutConfig::default());
        // floor(5.2) = 5 leaves an even remainder of 8.
        let xs: Vec<i32> = wall.tiles.iter().map(|tile| tile.x).collect();
        assert_eq!(xs, [4, 5, 6, 7, 8]);
        assert!(wall.tiles.iter().all(|tile| tile.z == 6 && tile.facing == Direction::South));
        assert!(
            wall.opposite_side_tiles
                .iter()
                .all(|tile| tile.z == 7 && tile.facing == Direction::North)
        );
    }

    #[test]
    fn odd_remainder_lengthens_wall() {
        // floor(6.0) = 6 leaves 9 on a 15-tile side, so the wall grows to 7.
        let wall = compute_interior_wall(RoomSpec::new(15, 13), &LayoutConfig::default());
        assert_eq!(wall.tiles.len(), 7);
        assert_eq!(wall.tiles[0].x, 4);
        assert_eq!(wall.tiles[6].x, 10);
    }

    #[test]
    fn deep_room_gets_vertical_wall() {
        let wall = compute_interior_wall(RoomSpec::new(14, 21), &LayoutConfig::default());
        assert_eq!(wall.tiles.len(), 9);
        assert!(wall.tiles.iter().all(|tile| tile.x == 6 && tile.facing == Direction::East));
        assert!(
            wall.opposite_side_tiles
                .iter()
                .all(|tile| tile.x == 7 && tile.facing == Direction::West)
        );
        assert_eq!(wall.tiles[0].z, 6);
    }
}

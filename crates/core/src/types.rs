use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// North/south links share an X-axis boundary; east/west links a Z-axis one.
    pub fn is_north_south(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    pub fn code(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(label)
    }
}

/// Integer tile inside a room's width × depth grid, origin at the north-west corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
}

/// A tile together with the direction its visible face points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacingTile {
    pub x: i32,
    pub z: i32,
    pub facing: Direction,
}

/// Global tile coordinate shared by every room in one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorldTile {
    pub x: i64,
    pub z: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub z: f32,
}

/// Required floor footprint of one room, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomSpec {
    pub width: u32,
    pub depth: u32,
}

impl RoomSpec {
    pub fn new(width: u32, depth: u32) -> Self {
        Self { width, depth }
    }

    pub fn longest(self) -> u32 {
        self.width.max(self.depth)
    }

    /// Extent of the room along the axis a link in `direction` crosses.
    pub fn extent_along(self, direction: Direction) -> u32 {
        if direction.is_north_south() { self.depth } else { self.width }
    }

    /// Extent of the room along the wall a link in `direction` runs through.
    pub fn extent_across(self, direction: Direction) -> u32 {
        if direction.is_north_south() { self.width } else { self.depth }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyMuseum,
    InvalidRoomDimensions { room_index: usize, width: u32, depth: u32 },
    PlacementExhausted { attempts: u32, room_count: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMuseum => write!(f, "museum has no rooms to lay out"),
            Self::InvalidRoomDimensions { room_index, width, depth } => {
                write!(f, "room {room_index} has invalid dimensions {width}x{depth}")
            }
            Self::PlacementExhausted { attempts, room_count } => write!(
                f,
                "failed to generate museum layout for {room_count} rooms after {attempts} attempts"
            ),
        }
    }
}

impl Error for LayoutError {}

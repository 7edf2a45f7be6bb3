//! Public data models produced by museum generation.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::inventory::{Artifact, GroupDetails};
use crate::types::{Direction, FacingTile, RoomSpec, Tile, WorldPos};

use super::sizing::RoomSizeReport;

/// Door tiles on both sides of one room boundary, each in its own room's frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorTiles {
    pub from: Vec<Tile>,
    pub to: Vec<Tile>,
}

/// Connection from room `i` to room `i + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorLink {
    pub direction: Direction,
    pub needs_correction: bool,
    pub doors: DoorTiles,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorWall {
    pub tiles: Vec<FacingTile>,
    pub opposite_side_tiles: Vec<FacingTile>,
}

impl InteriorWall {
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MuseumLayout {
    pub room_positions: Vec<WorldPos>,
    pub door_links: Vec<DoorLink>,
    pub interior_walls: Vec<InteriorWall>,
    /// 1-based attempt that produced this layout.
    pub attempts: u32,
}

/// Per-room door summary used to orient wayfinding labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDoorInfo {
    pub entrance_tiles: Vec<Tile>,
    pub exit_tiles: Vec<Tile>,
    pub all_door_tiles: Vec<Tile>,
    pub entrance_mid: Tile,
    pub exit_mid: Tile,
    pub entrance_rotation: f32,
    pub exit_rotation: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementAnchor {
    Wall { wall: Direction, start: usize, length: usize },
    Ring { side: Direction, start: usize, length: usize },
    Center,
}

/// One placed artifact group, positioned in the room-centered frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub contents: Vec<Artifact>,
    pub position: [f32; 3],
    pub rotation_y: f32,
    pub anchor: PlacementAnchor,
    /// Mounted on an outer wall rather than standing on the floor.
    pub is_wall: bool,
}

impl Placement {
    pub fn new(
        contents: Vec<Artifact>,
        position: [f32; 3],
        rotation_y: f32,
        anchor: PlacementAnchor,
    ) -> Self {
        let is_wall = matches!(anchor, PlacementAnchor::Wall { .. });
        Self { contents, position, rotation_y, anchor, is_wall }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorKind {
    Railing,
    Doorway,
    Plant,
    Visitor,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorPlacement {
    pub kind: DecorKind,
    pub position: [f32; 3],
    pub rotation_y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRoom {
    pub id: u32,
    pub name: String,
    pub subtitle: String,
    pub topic_name: String,
    pub index_in_topic: usize,
    pub total_in_topic: usize,
    pub size: RoomSizeReport,
    pub position: WorldPos,
    pub door_info: RoomDoorInfo,
    pub interior_wall: InteriorWall,
    pub placements: Vec<Placement>,
    pub dropped_groups: Vec<String>,
    pub decor: Vec<DecorPlacement>,
    /// Tallest artifact in the room, zero when it has none.
    pub max_prop_height: f32,
    pub group_details: Vec<GroupDetails>,
}

impl GeneratedRoom {
    pub fn spec(&self) -> RoomSpec {
        self.size.dimensions
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMuseum {
    pub seed: u64,
    pub rooms: Vec<GeneratedRoom>,
    pub layout: MuseumLayout,
}

impl GeneratedMuseum {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for (room, position) in self.rooms.iter().zip(&self.layout.room_positions) {
            bytes.extend(room.id.to_le_bytes());
            bytes.extend(room.size.dimensions.width.to_le_bytes());
            bytes.extend(room.size.dimensions.depth.to_le_bytes());
            bytes.extend(position.x.to_bits().to_le_bytes());
            bytes.extend(position.z.to_bits().to_le_bytes());

            bytes.extend((room.placements.len() as u32).to_le_bytes());
            for placement in &room.placements {
                for artifact in &placement.contents {
                    bytes.extend(artifact.id.to_le_bytes());
                }
                for coordinate in placement.position {
                    bytes.extend(coordinate.to_bits().to_le_bytes());
                }
                bytes.extend(placement.rotation_y.to_bits().to_le_bytes());
            }

            bytes.extend((room.decor.len() as u32).to_le_bytes());
            for decor in &room.decor {
                bytes.push(match decor.kind {
                    DecorKind::Railing => 0,
                    DecorKind::Doorway => 1,
                    DecorKind::Plant => 2,
                    DecorKind::Visitor => 3,
                });
                for coordinate in decor.position {
                    bytes.extend(coordinate.to_bits().to_le_bytes());
                }
            }
        }

        for link in &self.layout.door_links {
            bytes.push(link.direction.code());
            for tile in link.doors.from.iter().chain(&link.doors.to) {
                bytes.extend(tile.x.to_le_bytes());
                bytes.extend(tile.z.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

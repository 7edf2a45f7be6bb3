//! Procedural museum layout split into coherent submodules.

pub mod decor;
pub mod door_info;
pub mod doors;
pub mod grid;
pub mod interior_wall;
pub mod layout;
pub mod model;
pub mod placement;
pub mod sizing;

mod generator;
mod occupancy;
mod seed;

pub use door_info::compute_room_door_info;
pub use doors::{compute_door_tiles, compute_next_room_position, doors_face_each_other};
pub use generator::MuseumGenerator;
pub use grid::{room_footprint, tile_center_local, tile_to_world_tile};
pub use interior_wall::compute_interior_wall;
pub use layout::generate_room_layout;
pub use model::{
    DecorKind, DecorPlacement, DoorLink, DoorTiles, GeneratedMuseum, GeneratedRoom, InteriorWall,
    MuseumLayout, Placement, PlacementAnchor, RoomDoorInfo,
};
pub use placement::{RoomPlacements, place_artifacts_in_room};
pub use sizing::{RoomSizeReport, compute_room_size};

use crate::config::LayoutConfig;
use crate::inventory::MuseumInventory;
use crate::types::LayoutError;

pub fn generate_museum(
    run_seed: u64,
    inventory: &MuseumInventory,
) -> Result<GeneratedMuseum, LayoutError> {
    MuseumGenerator::new(run_seed, LayoutConfig::default()).generate(inventory)
}

//! Tunable constants for room sizing, room placement, and artifact placement.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub tile_size: f32,
    pub max_attempts: u32,
    pub door_width: u32,
    pub min_room_size: u32,
    pub wall_spacing_factor: u32,
    pub reserved_door_tiles: u32,
    pub reserved_label_tiles: u32,
    pub breathing_room_factor: u32,
    pub interior_wall_min_size: u32,
    pub interior_wall_ratio: f32,
    pub ring_padding: u32,
    pub corridor_width: u32,
    pub corridor_steps: u32,
    pub center_spacing: f32,
    pub label_offsets: [u32; 2],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_size: 1.0,
            max_attempts: 10,
            door_width: 3,
            min_room_size: 13,
            wall_spacing_factor: 3,
            reserved_door_tiles: 2 * 3,
            reserved_label_tiles: 4,
            breathing_room_factor: 5,
            interior_wall_min_size: 5,
            interior_wall_ratio: 0.4,
            ring_padding: 3,
            corridor_width: 2,
            corridor_steps: 100,
            center_spacing: 3.0,
            label_offsets: [4, 5],
        }
    }
}

impl LayoutConfig {
    pub fn reserved_tiles(&self) -> u32 {
        self.reserved_door_tiles + self.reserved_label_tiles
    }

    /// Minimum room dimension rounded up to the next odd value.
    pub fn min_odd_room_size(&self) -> u32 {
        force_odd(self.min_room_size.max(1))
    }
}

pub(crate) fn force_odd(value: u32) -> u32 {
    if value % 2 == 0 { value + 1 } else { value }
}

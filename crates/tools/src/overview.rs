//! ASCII overview of a generated museum in global tile space.

use std::collections::BTreeMap;

use museum_core::museum::{room_footprint, tile_to_world_tile};
use museum_core::{GeneratedMuseum, Tile, WorldTile};

const ROOM_GLYPHS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DOOR: char = '+';
const PARTITION: char = '#';
const EMPTY: char = ' ';

/// One character per global tile; rooms are labelled by walking order, doors
/// with `+` and interior partitions with `#`.
pub fn render_overview(museum: &GeneratedMuseum, tile_size: f32) -> String {
    let mut cells: BTreeMap<WorldTile, char> = BTreeMap::new();

    for (index, room) in museum.rooms.iter().enumerate() {
        let glyph = char::from(ROOM_GLYPHS[index % ROOM_GLYPHS.len()]);
        let spec = room.spec();
        let global = |tile: Tile| tile_to_world_tile(room.position, spec, tile, tile_size);
        for tile in room_footprint(room.position, spec, tile_size) {
            cells.insert(tile, glyph);
        }
        for wall in &room.interior_wall.tiles {
            cells.insert(global(Tile { x: wall.x, z: wall.z }), PARTITION);
        }
        for &door in &room.door_info.all_door_tiles {
            cells.insert(global(door), DOOR);
        }
    }

    let Some(min_x) = cells.keys().map(|tile| tile.x).min() else {
        return String::new();
    };
    let max_x = cells.keys().map(|tile| tile.x).max().unwrap_or(min_x);
    let min_z = cells.keys().map(|tile| tile.z).min().unwrap_or(0);
    let max_z = cells.keys().map(|tile| tile.z).max().unwrap_or(min_z);

    let mut out = String::new();
    for z in min_z..=max_z {
        let row: String = (min_x..=max_x)
            .map(|x| cells.get(&WorldTile { x, z }).copied().unwrap_or(EMPTY))
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

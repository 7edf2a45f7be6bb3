//! High-level museum generation that composes sizing, room layout, artifact
//! placement, and décor.

use log::info;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::LayoutConfig;
use crate::inventory::MuseumInventory;
use crate::types::{LayoutError, RoomSpec};

use super::decor::place_decor;
use super::door_info::compute_room_door_info;
use super::layout::generate_room_layout;
use super::model::{GeneratedMuseum, GeneratedRoom};
use super::placement::place_artifacts_in_room;
use super::seed::{derive_layout_seed, derive_room_seed};
use super::sizing::{RoomSizeReport, compute_room_size};

pub struct MuseumGenerator {
    run_seed: u64,
    config: LayoutConfig,
}

impl MuseumGenerator {
    pub fn new(run_seed: u64, config: LayoutConfig) -> Self {
        Self { run_seed, config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn generate(&self, inventory: &MuseumInventory) -> Result<GeneratedMuseum, LayoutError> {
        if inventory.rooms.is_empty() {
            return Err(LayoutError::EmptyMuseum);
        }

        let mut layout_rng = ChaCha8Rng::seed_from_u64(derive_layout_seed(self.run_seed));
        let reports: Vec<RoomSizeReport> = inventory
            .rooms
            .iter()
            .map(|room| compute_room_size(&room.artifacts, &self.config, &mut layout_rng))
            .collect();
        let specs: Vec<RoomSpec> = reports.iter().map(|report| report.dimensions).collect();
        let layout = generate_room_layout(&specs, &self.config, &mut layout_rng)?;

        let mut rooms = Vec::with_capacity(inventory.rooms.len());
        for (index, (room, size)) in inventory.rooms.iter().zip(reports).enumerate() {
            let spec = size.dimensions;
            let mut room_rng = ChaCha8Rng::seed_from_u64(derive_room_seed(self.run_seed, index));
            let door_info = compute_room_door_info(index, spec, &layout.door_links);
            let placed = place_artifacts_in_room(
                &room.groups(),
                spec,
                &door_info.all_door_tiles,
                &self.config,
                &mut room_rng,
            );
            let decor = place_decor(spec, &door_info, self.config.tile_size, &mut room_rng);

            rooms.push(GeneratedRoom {
                id: room.id,
                name: room.name.clone(),
                subtitle: room.subtitle.clone(),
                topic_name: room.topic_name.clone(),
                index_in_topic: room.index_in_topic,
                total_in_topic: room.total_in_topic,
                position: layout.room_positions[index],
                interior_wall: layout.interior_walls[index].clone(),
                size,
                door_info,
                placements: placed.placements,
                dropped_groups: placed.dropped,
                decor,
                max_prop_height: room.max_artifact_height(),
                group_details: room.group_details.clone(),
            });
        }

        let dropped: usize = rooms.iter().map(|room| room.dropped_groups.len()).sum();
        info!(
            "generated museum seed={} rooms={} attempts={} dropped_groups={dropped}",
            self.run_seed,
            rooms.len(),
            layout.attempts
        );
        Ok(GeneratedMuseum { seed: self.run_seed, rooms, layout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Artifact, ArtifactDimensions, RoomInventory};

    fn room(id: u32, artifact_count: u32) -> RoomInventory {
        RoomInventory {
            id,
            name: format!("Room {id}"),
            subtitle: String::new(),
            description: String::new(),
            topic_id: 1,
            topic_name: "Antiquity".to_string(),
            index_in_topic: id as usize,
            total_in_topic: 3,
            artifacts: (0..artifact_count)
                .map(|offset| Artifact {
                    id: id * 100 + offset,
                    name: format!("piece {offset}"),
                    model_path: String::new(),
                    group: None,
                    starred: offset == 0,
                    on_wall: offset % 2 == 1,
                    dimensions: ArtifactDimensions::new(1.2, 0.6, 1.0),
                })
                .collect(),
            group_details: Vec::new(),
        }
    }

    fn inventory() -> MuseumInventory {
        MuseumInventory { rooms: vec![room(1, 4), room(2, 7), room(3, 2)] }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let generator = MuseumGenerator::new(2024, LayoutConfig::default());
        let first = generator.generate(&inventory()).expect("first run");
        let second = generator.generate(&inventory()).expect("second run");
        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn every_room_gets_size_position_and_doors() {
        let generator = MuseumGenerator::new(7, LayoutConfig::default());
        let museum = generator.generate(&inventory()).expect("museum");
        assert_eq!(museum.rooms.len(), 3);
        assert_eq!(museum.layout.door_links.len(), 2);
        assert!(museum.rooms[0].door_info.entrance_tiles.is_empty());
        assert_eq!(museum.rooms[1].door_info.all_door_tiles.len(), 6);
        assert!(museum.rooms[2].door_info.exit_tiles.is_empty());
        for room in &museum.rooms {
            let RoomSpec { width, depth } = room.spec();
            assert!(width >= 13 && depth >= 13 && width % 2 == 1 && depth % 2 == 1);
            assert!(!room.decor.is_empty());
        }
    }

    #[test]
    fn rooms_report_their_tallest_artifact() {
        let mut tall_room = room(2, 3);
        tall_room.artifacts[1].dimensions = ArtifactDimensions::new(0.5, 0.5, 2.75);
        let inventory = MuseumInventory { rooms: vec![room(1, 0), tall_room, room(3, 2)] };
        let museum =
            MuseumGenerator::new(11, LayoutConfig::default()).generate(&inventory).expect("museum");
        let heights: Vec<f32> = museum.rooms.iter().map(|room| room.max_prop_height).collect();
        assert_eq!(heights, [0.0, 2.75, 1.0]);
    }

    #[test]
    fn absurdly_wide_wall_piece_is_dropped_instead_of_aborting() {
        let mut wide = room(1, 2);
        wide.artifacts[1].dimensions = ArtifactDimensions::new(3.0e38, 1.0, 1.0);
        wide.artifacts[1].group = Some("endless frieze".to_string());
        let inventory = MuseumInventory { rooms: vec![wide, room(2, 1)] };
        let museum =
            MuseumGenerator::new(1, LayoutConfig::default()).generate(&inventory).expect("museum");
        assert_eq!(museum.rooms[0].dropped_groups, ["endless frieze"]);
        assert_eq!(museum.rooms[0].spec(), RoomSpec::new(13, 13));
    }

    #[test]
    fn empty_inventory_is_an_error() {
        let generator = MuseumGenerator::new(1, LayoutConfig::default());
        assert_eq!(
            generator.generate(&MuseumInventory::default()),
            Err(LayoutError::EmptyMuseum)
        );
    }
}

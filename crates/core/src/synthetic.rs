//! Randomized stand-in catalogs for exercising the layout engine without
//! curated content.

use rand_chacha::rand_core::Rng;

use crate::catalog::{ArtifactEntry, MeasuredDimensions, MuseumCatalog, RoomEntry, TopicEntry};
use crate::random::{chance, random_index, random_range_inclusive, shuffle, unit_f32};

const MAX_ROOMS: usize = 10;
const MAX_ITEMS_PER_ROOM: usize = 20;
const MAX_STARRED_PER_ROOM: usize = 5;
const SYNTHETIC_TOPIC: u32 = 1;

/// Spreads `total_items` artifacts over one to ten rooms.
///
/// Every room but the last takes between one and twenty of the remaining items;
/// the last room takes the rest.
pub fn generate_synthetic_catalog<R: Rng + ?Sized>(
    rng: &mut R,
    total_items: usize,
) -> MuseumCatalog {
    let room_count = random_range_inclusive(rng, 1, MAX_ROOMS);
    let mut remaining = total_items;
    let mut counts = Vec::with_capacity(room_count);
    for index in 0..room_count {
        let count = if index == room_count - 1 || remaining == 0 {
            remaining
        } else {
            random_range_inclusive(rng, 1, remaining.min(MAX_ITEMS_PER_ROOM))
        };
        remaining -= count;
        counts.push(count);
    }

    let mut next_id = 1_u32;
    let rooms = counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let room_id = index as u32 + 1;
            let artifacts = synthetic_artifacts(rng, room_id, count, &mut next_id);
            RoomEntry {
                id: room_id,
                name: format!("Room {index}"),
                subtitle: String::new(),
                description: format!("Room containing {count} items"),
                topic_id: SYNTHETIC_TOPIC,
                artifacts,
                groups: Vec::new(),
            }
        })
        .collect();

    MuseumCatalog {
        topics: vec![TopicEntry { id: SYNTHETIC_TOPIC, name: "Synthetic collection".to_string() }],
        rooms,
    }
}

fn synthetic_artifacts<R: Rng + ?Sized>(
    rng: &mut R,
    room_id: u32,
    count: usize,
    next_id: &mut u32,
) -> Vec<ArtifactEntry> {
    let mut order: Vec<usize> = (0..count).collect();
    shuffle(rng, &mut order);
    let starred_count = random_range_inclusive(rng, 0, count.min(MAX_STARRED_PER_ROOM));
    let starred = &order[..starred_count];

    let (wall, floor): (Vec<usize>, Vec<usize>) = (0..count).partition(|_| chance(rng, 3, 10));
    let mut groups = vec![String::new(); count];
    assign_groups(rng, room_id, "wall", &wall, &mut groups);
    assign_groups(rng, room_id, "floor", &floor, &mut groups);

    (0..count)
        .map(|index| {
            let id = *next_id;
            *next_id += 1;
            let on_wall = wall.contains(&index);
            ArtifactEntry {
                id,
                name: format!("Item {id}"),
                model_path: format!("Cube_{id:03}.glb"),
                group: Some(groups[index].clone()),
                starred: starred.contains(&index),
                on_wall,
                dimensions: Some(synthetic_dimensions(rng, on_wall)),
            }
        })
        .collect()
}

/// Up to a third as many multi-piece groups as there are items, two to four
/// pieces each; leftovers become solo groups.
fn assign_groups<R: Rng + ?Sized>(
    rng: &mut R,
    room_id: u32,
    kind: &str,
    indexes: &[usize],
    groups: &mut [String],
) {
    let group_count = random_range_inclusive(rng, 0, indexes.len() / 3);
    let mut available = indexes.to_vec();
    for group_number in 1..=group_count {
        if available.len() < 2 {
            break;
        }
        let size = random_range_inclusive(rng, 2, available.len().min(4));
        for _ in 0..size {
            let member = available.remove(random_index(rng, available.len()));
            groups[member] = format!("{room_id}-{kind}-{group_number}");
        }
    }
    for index in available {
        groups[index] = format!("{room_id}-{kind}-solo-{index}");
    }
}

fn synthetic_dimensions<R: Rng + ?Sized>(rng: &mut R, on_wall: bool) -> MeasuredDimensions {
    let width = 0.5 + unit_f32(rng) * 2.0;
    let depth = if on_wall { 0.1 + unit_f32(rng) * 0.3 } else { 0.4 + unit_f32(rng) * 1.2 };
    let height = 0.5 + unit_f32(rng) * 2.0;
    MeasuredDimensions { width, depth, height }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn catalogs_account_for_every_item(seed in any::<u64>(), total in 0_usize..120) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let catalog = generate_synthetic_catalog(&mut rng, total);

            prop_assert!((1..=MAX_ROOMS).contains(&catalog.rooms.len()));
            let placed: usize = catalog.rooms.iter().map(|room| room.artifacts.len()).sum();
            prop_assert_eq!(placed, total);

            let last = catalog.rooms.len() - 1;
            for room in &catalog.rooms[..last] {
                prop_assert!(room.artifacts.len() <= MAX_ITEMS_PER_ROOM);
            }
            for room in &catalog.rooms {
                let starred = room.artifacts.iter().filter(|artifact| artifact.starred).count();
                prop_assert!(starred <= MAX_STARRED_PER_ROOM);
            }
        }

        #[test]
        fn groups_never_mix_wall_and_floor_pieces(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let catalog = generate_synthetic_catalog(&mut rng, 60);
            for room in &catalog.rooms {
                let mut sizes: BTreeMap<&str, (usize, bool)> = BTreeMap::new();
                for artifact in &room.artifacts {
                    let key = artifact.group.as_deref().unwrap_or_default();
                    let entry = sizes.entry(key).or_insert((0, artifact.on_wall));
                    prop_assert_eq!(entry.1, artifact.on_wall);
                    entry.0 += 1;
                }
                prop_assert!(sizes.values().all(|(size, _)| (1..=4).contains(size)));
            }
        }
    }

    #[test]
    fn artifact_ids_are_sequential_across_rooms() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let catalog = generate_synthetic_catalog(&mut rng, 45);
        let ids: Vec<u32> =
            catalog.rooms.iter().flat_map(|room| room.artifacts.iter().map(|a| a.id)).collect();
        assert_eq!(ids, (1..=45).collect::<Vec<u32>>());
        assert!(catalog.clone().into_inventory().is_ok());
    }
}

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use clap::Parser;
use museum_core::museum::{PlacementAnchor, doors_face_each_other, room_footprint};
use museum_core::{
    GeneratedMuseum, LayoutConfig, LayoutError, MuseumGenerator, generate_synthetic_catalog,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
    #[arg(short, long, default_value_t = 120)]
    max_items: usize,
}

fn check_invariants(museum: &GeneratedMuseum, config: &LayoutConfig) -> Result<(), String> {
    let seed = museum.seed;
    let mut claimed = BTreeSet::new();
    for (index, room) in museum.rooms.iter().enumerate() {
        let spec = room.spec();
        if spec.width % 2 == 0 || spec.depth % 2 == 0 || spec.width < 13 || spec.depth < 13 {
            return Err(format!("seed {seed}: room {index} has size {}x{}", spec.width, spec.depth));
        }
        for tile in room_footprint(room.position, spec, config.tile_size) {
            if !claimed.insert(tile) {
                return Err(format!("seed {seed}: room {index} overlaps at {tile:?}"));
            }
        }
        for placement in &room.placements {
            if let PlacementAnchor::Wall { wall, start, length } = placement.anchor {
                let side = spec.extent_across(wall) as usize;
                if start == 0 || start + length >= side {
                    return Err(format!("seed {seed}: room {index} wall run touches a corner"));
                }
            }
        }
    }

    for (index, link) in museum.layout.door_links.iter().enumerate() {
        let (from, to) = (&museum.rooms[index], &museum.rooms[index + 1]);
        let aligned = doors_face_each_other(
            from.position,
            from.spec(),
            to.position,
            to.spec(),
            link.direction,
            &link.doors,
            config.tile_size,
        );
        if !aligned {
            return Err(format!("seed {seed}: door {index} ({}) is misaligned", link.direction));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting layout fuzz from seed {} for {} runs...", args.seed, args.runs);

    let config = LayoutConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut exhausted = 0_u32;
    let mut dropped = 0_usize;

    for _ in 0..args.runs {
        let run_seed = rng.next_u64();
        let items = (rng.next_u64() % (args.max_items as u64 + 1)) as usize;
        let mut catalog_rng = ChaCha8Rng::seed_from_u64(run_seed);
        let inventory = generate_synthetic_catalog(&mut catalog_rng, items).into_inventory()?;

        let museum = match MuseumGenerator::new(run_seed, config.clone()).generate(&inventory) {
            Ok(museum) => museum,
            Err(LayoutError::PlacementExhausted { .. }) => {
                exhausted += 1;
                continue;
            }
            Err(other) => bail!("seed {run_seed}: {other}"),
        };
        if let Err(message) = check_invariants(&museum, &config) {
            bail!("Invariant failed: {message}");
        }
        dropped += museum.rooms.iter().map(|room| room.dropped_groups.len()).sum::<usize>();
    }

    println!(
        "Fuzzing completed: {} runs, {exhausted} exhausted, {dropped} dropped groups",
        args.runs
    );
    Ok(())
}

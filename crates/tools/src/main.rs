mod logger;
mod overview;
mod seed;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use log::info;
use museum_core::{
    GeneratedMuseum, LayoutConfig, MuseumGenerator, MuseumInventory, generate_synthetic_catalog,
    load_catalog_from_file,
};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

use crate::overview::render_overview;
use crate::seed::SeedChoice;

/// Generate a museum layout from a catalog or a synthetic collection.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the museum catalog JSON file
    #[arg(short, long, conflicts_with = "random")]
    catalog: Option<PathBuf>,
    /// Synthesize a catalog with this many artifacts instead of loading one
    #[arg(short, long)]
    random: Option<usize>,
    /// Run seed; generated from the clock when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file overriding layout defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the generated museum JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print an ASCII overview of the floor plan to stderr
    #[arg(short, long)]
    map: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose).map_err(|e| anyhow!("failed to install logger: {e}"))?;

    let seed = SeedChoice::resolve(args.seed);
    eprintln!("Seed: {} ({})", seed.value(), seed.source());

    let config = match &args.config {
        Some(path) => load_layout_config(path)?,
        None => LayoutConfig::default(),
    };
    let inventory = load_inventory(&args, seed.value())?;
    info!("loaded {} rooms", inventory.rooms.len());

    let generator = MuseumGenerator::new(seed.value(), config);
    let museum = generator
        .generate(&inventory)
        .with_context(|| format!("Layout generation failed for seed {}", seed.value()))?;

    if args.map {
        eprint!("{}", render_overview(&museum, generator.config().tile_size));
    }
    write_museum(&museum, args.output.as_deref())?;

    eprintln!("Rooms: {}", museum.rooms.len());
    eprintln!("Attempts: {}", museum.layout.attempts);
    eprintln!("Fingerprint: {:#018x}", museum.fingerprint());
    Ok(())
}

fn load_inventory(args: &Args, seed: u64) -> Result<MuseumInventory> {
    let catalog = match (&args.catalog, args.random) {
        (Some(path), _) => load_catalog_from_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        (None, Some(items)) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_synthetic_catalog(&mut rng, items)
        }
        (None, None) => bail!("either --catalog or --random is required"),
    };
    catalog.into_inventory().context("Catalog cannot be laid out")
}

fn load_layout_config(path: &Path) -> Result<LayoutConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse layout config: {}", path.display()))
}

fn write_museum(museum: &GeneratedMuseum, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(museum).context("Failed to serialize museum")?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

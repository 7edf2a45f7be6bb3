pub mod catalog;
pub mod config;
pub mod inventory;
pub mod museum;
pub mod synthetic;
pub mod types;

mod random;

pub use catalog::{CatalogLoadError, MuseumCatalog, load_catalog_from_file, parse_catalog};
pub use config::LayoutConfig;
pub use inventory::{
    Artifact, ArtifactDimensions, ArtifactGroup, GroupDetails, MuseumInventory, RoomInventory,
};
pub use museum::{GeneratedMuseum, GeneratedRoom, MuseumGenerator, MuseumLayout, generate_museum};
pub use synthetic::generate_synthetic_catalog;
pub use types::*;

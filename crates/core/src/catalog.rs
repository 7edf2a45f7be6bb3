//! JSON museum catalog: topics, rooms, and the artifacts each room displays.
//!
//! The catalog is the on-disk input format. Loading it resolves everything the
//! layout engine needs into a [`MuseumInventory`]:
//! - artifacts without measured dimensions fall back to a unit cube
//! - rooms learn their topic name and their 1-based position in that topic

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::inventory::{
    Artifact, ArtifactDimensions, GroupDetails, MuseumInventory, RoomInventory,
};


// ---------------------------------------------------------------------------
// File format structs
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MuseumCatalog {
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub topic_id: u32,
    #[serde(default)]
    pub artifacts: Vec<ArtifactEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupEntry>,
}

/// Curatorial text for one group; `id` matches the artifacts' `group` field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtifactEntry {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub on_wall: bool,
    /// Measured bounding box; absent when the model could not be measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<MeasuredDimensions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MeasuredDimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum CatalogLoadError {
    Io(io::Error),
    InvalidJson(String),
    /// The catalog lists no rooms.
    EmptyCatalog,
    DuplicateRoomId(u32),
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "catalog I/O error: {e}"),
            Self::InvalidJson(message) => write!(f, "invalid catalog JSON: {message}"),
            Self::EmptyCatalog => write!(f, "catalog contains no rooms"),
            Self::DuplicateRoomId(id) => write!(f, "room id {id} appears more than once"),
        }
    }
}

impl Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogLoadError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

pub fn load_catalog_from_file(path: &Path) -> Result<MuseumCatalog, CatalogLoadError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

pub fn parse_catalog(json: &str) -> Result<MuseumCatalog, CatalogLoadError> {
    serde_json::from_str(json).map_err(|e| CatalogLoadError::InvalidJson(e.to_string()))
}

impl MuseumCatalog {
    /// Resolves the catalog into the inventory the layout engine consumes.
    /// Rooms keep catalog order, which is also the walking order.
    pub fn into_inventory(self) -> Result<MuseumInventory, CatalogLoadError> {
        if self.rooms.is_empty() {
            return Err(CatalogLoadError::EmptyCatalog);
        }
        let mut seen = BTreeSet::new();
        if let Some(room) = self.rooms.iter().find(|room| !seen.insert(room.id)) {
            return Err(CatalogLoadError::DuplicateRoomId(room.id));
        }

        let topic_names: BTreeMap<u32, &str> =
            self.topics.iter().map(|topic| (topic.id, topic.name.trim())).collect();
        let mut topic_members: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for room in &self.rooms {
            topic_members.entry(room.topic_id).or_default().push(room.id);
        }
        for members in topic_members.values_mut() {
            members.sort_unstable();
        }

        let rooms = self
            .rooms
            .iter()
            .map(|room| {
                let members = &topic_members[&room.topic_id];
                let position = members.iter().position(|&id| id == room.id).unwrap_or(0);
                let topic_name = match topic_names.get(&room.topic_id) {
                    Some(name) => name.to_string(),
                    None => format!("topic {}", room.topic_id),
                };
                RoomInventory {
                    id: room.id,
                    name: room.name.trim().to_string(),
                    subtitle: room.subtitle.trim().to_string(),
                    description: room.description.trim().to_string(),
                    topic_id: room.topic_id,
                    topic_name,
                    index_in_topic: position + 1,
                    total_in_topic: members.len(),
                    artifacts: room.artifacts.iter().map(resolve_artifact).collect(),
                    group_details: room.groups.iter().map(resolve_group).collect(),
                }
            })
            .collect();
        Ok(MuseumInventory { rooms })
    }
}

fn resolve_artifact(entry: &ArtifactEntry) -> Artifact {
    Artifact {
        id: entry.id,
        name: entry.name.trim().to_string(),
        model_path: entry.model_path.trim().to_string(),
        group: entry.group.as_ref().map(|group| group.trim().to_string()),
        starred: entry.starred,
        on_wall: entry.on_wall,
        dimensions: resolve_dimensions(entry),
    }
}

fn resolve_group(entry: &GroupEntry) -> GroupDetails {
    GroupDetails {
        id: entry.id.trim().to_string(),
        kind: entry.kind.trim().to_string(),
        name: entry.name.trim().to_string(),
        description: entry.description.trim().to_string(),
    }
}

fn resolve_dimensions(entry: &ArtifactEntry) -> ArtifactDimensions {
    match entry.dimensions {
        Some(MeasuredDimensions { width, depth, height })
            if [width, depth, height].iter().all(|value| value.is_finite() && *value > 0.0) =>
        {
            ArtifactDimensions::new(width, depth, height)
        }
        Some(measured) => {
            warn!("artifact {} has unusable dimensions {measured:?}, using a unit cube", entry.id);
            ArtifactDimensions::unit_cube()
        }
        None => ArtifactDimensions::unit_cube(),
    }
}

//! Resolved artifact inventory: what each room must display, with measured
//! bounding boxes and placement flags.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub area: f32,
}

impl ArtifactDimensions {
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self { width, depth, height, area: width * depth }
    }

    /// Substitute used when a model's bounding box could not be measured.
    pub fn unit_cube() -> Self {
        Self { width: 1.0, depth: 1.0, height: 1.0, area: 1.0 }
    }

    pub fn footprint(&self) -> f32 {
        self.width * self.depth
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u32,
    pub name: String,
    pub model_path: String,
    pub group: Option<String>,
    pub starred: bool,
    pub on_wall: bool,
    pub dimensions: ArtifactDimensions,
}

impl Artifact {
    pub fn group_key(&self) -> String {
        match &self.group {
            Some(group) if !group.trim().is_empty() => group.trim().to_string(),
            _ => format!("ungrouped-{}", self.id),
        }
    }
}

/// Artifacts that are always placed together as one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactGroup {
    pub key: String,
    pub members: Vec<Artifact>,
}

impl ArtifactGroup {
    pub fn singleton(artifact: Artifact) -> Self {
        Self { key: artifact.group_key(), members: vec![artifact] }
    }

    pub fn has_starred(&self) -> bool {
        self.members.iter().any(|artifact| artifact.starred)
    }

    pub fn all_on_wall(&self) -> bool {
        self.members.iter().all(|artifact| artifact.on_wall)
    }

    pub fn total_width(&self) -> f32 {
        self.members.iter().map(|artifact| artifact.dimensions.width).sum()
    }

    pub fn max_depth(&self) -> f32 {
        self.members.iter().map(|artifact| artifact.dimensions.depth).fold(0.0, f32::max)
    }
}

/// Curatorial text attached to one artifact group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetails {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomInventory {
    pub id: u32,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub topic_id: u32,
    pub topic_name: String,
    /// 1-based position among the rooms of the same topic.
    pub index_in_topic: usize,
    pub total_in_topic: usize,
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub group_details: Vec<GroupDetails>,
}

impl RoomInventory {
    pub fn groups(&self) -> Vec<ArtifactGroup> {
        group_artifacts(&self.artifacts)
    }

    /// Height of the tallest artifact; zero for an empty room.
    pub fn max_artifact_height(&self) -> f32 {
        self.artifacts.iter().map(|artifact| artifact.dimensions.height).fold(0.0, f32::max)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MuseumInventory {
    pub rooms: Vec<RoomInventory>,
}

/// Groups artifacts by group key, keeping groups in first-seen order.
pub fn group_artifacts(artifacts: &[Artifact]) -> Vec<ArtifactGroup> {
    let mut groups: Vec<ArtifactGroup> = Vec::new();
    for artifact in artifacts {
        let key = artifact.group_key();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.members.push(artifact.clone()),
            None => groups.push(ArtifactGroup { key, members: vec![artifact.clone()] }),
        }
    }
    groups
}

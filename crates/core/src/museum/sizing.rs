//! Converts a room's artifact inventory into odd floor dimensions.
//!
//! Wall-mounted and floor-standing non-starred artifacts are laid against the
//! perimeter, so the perimeter drives the size. Starred centerpieces then grow
//! the room until their grid fits with breathing room.

use log::{debug, warn};
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{LayoutConfig, force_odd};
use crate::inventory::Artifact;
use crate::random::coin_flip;
use crate::types::RoomSpec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallAnalysis {
    pub non_starred_count: usize,
    pub wall_length_needed: u32,
    pub wall_length_with_spacing: u32,
    pub reserved_tiles: u32,
    pub perimeter_needed: u32,
    pub actual_perimeter: u32,
    pub available_wall_space: i64,
    pub has_enough_space: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarredAnalysis {
    pub starred_count: usize,
    pub total_starred_area: f32,
    pub max_floor_width: u32,
    pub max_floor_depth: u32,
    pub room_was_scaled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSizeReport {
    pub dimensions: RoomSpec,
    pub wall_analysis: WallAnalysis,
    pub starred_analysis: StarredAnalysis,
}

pub fn compute_room_size<R: Rng + ?Sized>(
    artifacts: &[Artifact],
    config: &LayoutConfig,
    rng: &mut R,
) -> RoomSizeReport {
    let minimum = f64::from(config.min_odd_room_size());
    let (non_starred, starred): (Vec<&Artifact>, Vec<&Artifact>) =
        artifacts.iter().partition(|artifact| !artifact.starred);

    let wall_length_needed: f64 =
        non_starred.iter().map(|artifact| f64::from(artifact.dimensions.width).ceil()).sum();
    let spacing = non_starred.len().saturating_sub(1) as f64;
    let wall_length_with_spacing =
        (wall_length_needed + spacing) * f64::from(config.wall_spacing_factor);
    let reserved_tiles = config.reserved_tiles();
    let perimeter_needed = wall_length_with_spacing + f64::from(reserved_tiles);

    // perimeter = 2 * (width + depth) - 4
    let sum_of_dimensions = ((perimeter_needed + 4.0) / 2.0).ceil();
    let major = (sum_of_dimensions / 2.0).ceil();
    let minor = sum_of_dimensions - major;
    let (mut width, mut depth) = if coin_flip(rng) { (major, minor) } else { (minor, major) };
    width = odd_f64(width.max(minimum));
    depth = odd_f64(depth.max(minimum));

    let mut room_was_scaled = false;
    let total_starred_area: f64 =
        starred.iter().map(|artifact| f64::from(artifact.dimensions.area)).sum();
    if !starred.is_empty() {
        let max_width = starred
            .iter()
            .map(|artifact| f64::from(artifact.dimensions.width).ceil())
            .fold(0.0, f64::max);
        let max_depth = starred
            .iter()
            .map(|artifact| f64::from(artifact.dimensions.depth).ceil())
            .fold(0.0, f64::max);
        let per_row = (starred.len() as f64).sqrt().ceil();
        let breathing = f64::from(config.breathing_room_factor);
        let required_width = (per_row * max_width + (per_row - 1.0)) * breathing;
        let required_depth = (per_row * max_depth + (per_row - 1.0)) * breathing;
        debug!(
            "{} starred artifacts in a {per_row}x{per_row} grid need \
             {required_width}x{required_depth}",
            starred.len()
        );
        if width < required_width {
            width = odd_f64(required_width);
            room_was_scaled = true;
        }
        if depth < required_depth {
            depth = odd_f64(required_depth);
            room_was_scaled = true;
        }
    }

    let all_finite = [width, depth, perimeter_needed, total_starred_area]
        .iter()
        .all(|value| value.is_finite())
        && starred.iter().chain(&non_starred).all(|artifact| {
            artifact.dimensions.width.is_finite() && artifact.dimensions.depth.is_finite()
        });
    let dimensions = if all_finite && width <= f64::from(u32::MAX) && depth <= f64::from(u32::MAX) {
        RoomSpec::new(width as u32, depth as u32)
    } else {
        warn!("non-finite room size for {} artifacts, using fallback dimensions", artifacts.len());
        let fallback = config.min_odd_room_size();
        room_was_scaled = false;
        RoomSpec::new(fallback, fallback)
    };

    let actual_perimeter =
        dimensions.width.saturating_add(dimensions.depth).saturating_mul(2).saturating_sub(4);
    let available_wall_space = i64::from(actual_perimeter) - i64::from(reserved_tiles);
    let wall_length_with_spacing = finite_u32(wall_length_with_spacing);
    let has_enough_space = available_wall_space >= i64::from(wall_length_with_spacing);
    if !has_enough_space {
        warn!(
            "room {}x{} has {available_wall_space} wall tiles but needs {wall_length_with_spacing}",
            dimensions.width, dimensions.depth
        );
    }

    RoomSizeReport {
        dimensions,
        wall_analysis: WallAnalysis {
            non_starred_count: non_starred.len(),
            wall_length_needed: finite_u32(wall_length_needed),
            wall_length_with_spacing,
            reserved_tiles,
            perimeter_needed: finite_u32(perimeter_needed),
            actual_perimeter,
            available_wall_space,
            has_enough_space,
        },
        starred_analysis: StarredAnalysis {
            starred_count: starred.len(),
            total_starred_area: total_starred_area as f32,
            max_floor_width: dimensions.width / 4,
            max_floor_depth: dimensions.depth / 4,
            room_was_scaled,
        },
    }
}

fn odd_f64(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX - 1) {
        f64::from(force_odd(value.ceil() as u32))
    } else {
        value
    }
}

fn finite_u32(value: f64) -> u32 {
    if value.is_finite() { value.clamp(0.0, f64::from(u32::MAX)) as u32 } else { 0 }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::inventory::ArtifactDimensions;

    fn artifact(id: u32, width: f32, depth: f32, starred: bool) -> Artifact {
        Artifact {
            id,
            name: format!("artifact {id}"),
            model_path: String::new(),
            group: None,
            starred,
            on_wall: !starred,
            dimensions: ArtifactDimensions::new(width, depth, 1.0),
        }
    }

    #[test]
    fn empty_room_uses_minimum_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let report = compute_room_size(&[], &LayoutConfig::default(), &mut rng);
        assert_eq!(report.dimensions, RoomSpec::new(13, 13));
        assert_eq!(report.wall_analysis.perimeter_needed, 10);
        assert!(report.wall_analysis.has_enough_space);
    }

    #[test]
    fn many_wall_artifacts_grow_room_past_minimum() {
        let artifacts: Vec<Artifact> = (0..20).map(|id| artifact(id, 1.5, 0.3, false)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let report = compute_room_size(&artifacts, &LayoutConfig::default(), &mut rng);
        // 20 * 2 tiles + 19 spacing, tripled, plus 10 reserved = 187 perimeter tiles.
        assert_eq!(report.wall_analysis.wall_length_needed, 40);
        assert_eq!(report.wall_analysis.perimeter_needed, 187);
        let RoomSpec { width, depth } = report.dimensions;
        assert!(width % 2 == 1 && depth % 2 == 1);
        assert!(width + depth >= 95, "width+depth too small: {width}+{depth}");
        assert!(report.wall_analysis.has_enough_space);
    }

    #[test]
    fn starred_grid_scales_room_with_breathing_room() {
        let artifacts: Vec<Artifact> = (0..4).map(|id| artifact(id, 2.2, 1.1, true)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = compute_room_size(&artifacts, &LayoutConfig::default(), &mut rng);
        // 2x2 grid of 3x2 footprints with one tile between: 7x5, times five.
        assert_eq!(report.dimensions, RoomSpec::new(35, 25));
        assert!(report.starred_analysis.room_was_scaled);
        assert_eq!(report.starred_analysis.starred_count, 4);
        assert_eq!(report.starred_analysis.max_floor_width, 8);
    }

    #[test]
    fn single_small_starred_item_keeps_minimum_room() {
        let artifacts = vec![artifact(1, 1.0, 1.0, true)];
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = compute_room_size(&artifacts, &LayoutConfig::default(), &mut rng);
        assert_eq!(report.dimensions, RoomSpec::new(13, 13));
        assert!(!report.starred_analysis.room_was_scaled);
    }

    #[test]
    fn nan_dimensions_fall_back_to_minimum() {
        let artifacts = vec![artifact(1, f32::NAN, 1.0, false), artifact(2, 1.0, f32::NAN, true)];
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let report = compute_room_size(&artifacts, &LayoutConfig::default(), &mut rng);
        assert_eq!(report.dimensions, RoomSpec::new(13, 13));
    }

    #[test]
    fn split_bias_varies_orientation_across_draws() {
        // 7 tiles + 6 spacing, tripled, plus 10 reserved splits 27 into 14 + 13.
        let artifacts: Vec<Artifact> = (0..7).map(|id| artifact(id, 1.0, 0.3, false)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut orientations = BTreeSet::new();
        for _ in 0..32 {
            let report = compute_room_size(&artifacts, &LayoutConfig::default(), &mut rng);
            let RoomSpec { width, depth } = report.dimensions;
            assert!((width, depth) == (15, 13) || (width, depth) == (13, 15));
            orientations.insert(width > depth);
        }
        assert_eq!(orientations.len(), 2, "expected both width-first and depth-first splits");
    }
}

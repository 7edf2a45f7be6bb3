use crate::inventory::{Artifact, ArtifactGroup};

use super::super::model::{Placement, PlacementAnchor};

/// Most starred pieces the center templates arrange.
pub const MAX_CENTER_PIECES: usize = 5;

/// Starred pieces arranged around the room center, largest footprint first,
/// plus whatever did not fit the templates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterPlacement {
    pub placed: Vec<Placement>,
    pub overflow: Vec<Artifact>,
}

pub fn place_center_artifacts(groups: &[ArtifactGroup], spacing: f32) -> CenterPlacement {
    let mut pieces: Vec<Artifact> =
        groups.iter().flat_map(|group| group.members.iter().cloned()).collect();
    pieces.sort_by(|a, b| b.dimensions.footprint().total_cmp(&a.dimensions.footprint()));

    let overflow = pieces.split_off(pieces.len().min(MAX_CENTER_PIECES));
    let offsets = template(pieces.len(), spacing);
    let placed = pieces
        .into_iter()
        .zip(offsets)
        .map(|(piece, (x, z))| {
            Placement::new(vec![piece], [x, 0.0, z], 0.0, PlacementAnchor::Center)
        })
        .collect();
    CenterPlacement { placed, overflow }
}

/// `(x, z)` offsets from the center, in the order pieces are assigned.
fn template(count: usize, spacing: f32) -> Vec<(f32, f32)> {
    let center = (0.0, 0.0);
    let north = (0.0, -spacing);
    let east = (spacing, 0.0);
    let south = (0.0, spacing);
    let west = (-spacing, 0.0);
    match count {
        0 => Vec::new(),
        1 => vec![center],
        2 => vec![(-spacing / 2.0, 0.0), (spacing / 2.0, 0.0)],
        3 => vec![center, west, east],
        4 => vec![center, north, east, south],
        _ => vec![center, north, east, south, west],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ArtifactDimensions;

    fn starred(id: u32, width: f32, depth: f32) -> ArtifactGroup {
        ArtifactGroup::singleton(Artifact {
            id,
            name: format!("centerpiece {id}"),
            model_path: String::new(),
            group: None,
            starred: true,
            on_wall: false,
            dimensions: ArtifactDimensions::new(width, depth, 1.0),
        })
    }

    fn positions(placement: &CenterPlacement) -> Vec<(u32, [f32; 3])> {
        placement
            .placed
            .iter()
            .map(|placed| (placed.contents[0].id, placed.position))
            .collect()
    }

    #[test]
    fn single_piece_sits_dead_center() {
        let placement = place_center_artifacts(&[starred(1, 1.0, 1.0)], 3.0);
        assert_eq!(positions(&placement), [(1, [0.0, 0.0, 0.0])]);
        assert_eq!(placement.placed[0].anchor, PlacementAnchor::Center);
    }

    #[test]
    fn pair_sits_side_by_side() {
        let placement = place_center_artifacts(&[starred(1, 1.0, 1.0), starred(2, 2.0, 2.0)], 3.0);
        assert_eq!(positions(&placement), [(2, [-1.5, 0.0, 0.0]), (1, [1.5, 0.0, 0.0])]);
    }

    #[test]
    fn largest_piece_takes_the_center_of_a_trio() {
        let groups = [starred(1, 1.0, 1.0), starred(2, 3.0, 3.0), starred(3, 2.0, 1.0)];
        let placement = place_center_artifacts(&groups, 3.0);
        assert_eq!(
            positions(&placement),
            [(2, [0.0, 0.0, 0.0]), (3, [-3.0, 0.0, 0.0]), (1, [3.0, 0.0, 0.0])]
        );
    }

    #[test]
    fn cross_patterns_fill_north_east_south_then_west() {
        let groups: Vec<ArtifactGroup> =
            (1..=5).map(|id| starred(id, 6.0 - id as f32, 1.0)).collect();
        let placement = place_center_artifacts(&groups, 3.0);
        assert_eq!(
            positions(&placement),
            [
                (1, [0.0, 0.0, 0.0]),
                (2, [0.0, 0.0, -3.0]),
                (3, [3.0, 0.0, 0.0]),
                (4, [0.0, 0.0, 3.0]),
                (5, [-3.0, 0.0, 0.0]),
            ]
        );
        assert!(placement.overflow.is_empty());
    }

    #[test]
    fn smallest_pieces_past_five_overflow() {
        let groups: Vec<ArtifactGroup> =
            (1..=7).map(|id| starred(id, 8.0 - id as f32, 1.0)).collect();
        let placement = place_center_artifacts(&groups, 3.0);
        assert_eq!(placement.placed.len(), 5);
        let overflow: Vec<u32> = placement.overflow.iter().map(|piece| piece.id).collect();
        assert_eq!(overflow, [6, 7]);
    }

    #[test]
    fn grouped_pieces_are_placed_individually() {
        let mut group = starred(1, 1.0, 1.0);
        let mut partner = group.members[0].clone();
        partner.id = 2;
        group.members.push(partner);
        let placement = place_center_artifacts(&[group], 3.0);
        assert_eq!(placement.placed.len(), 2);
        assert!(placement.placed.iter().all(|placed| placed.contents.len() == 1));
    }
}

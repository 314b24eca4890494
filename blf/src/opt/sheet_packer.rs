use crate::config::BLFConfig;
use crate::opt::orientation::{Orientation, orientations};
use crate::opt::score::{PlacementScore, score};
use crate::opt::search::{candidate_positions, is_valid_position};
use log::debug;
use sheetnest::entities::{NestingOptions, NestingPart, OccupiedSpace, PartShape, PlacedPart};
use sheetnest::geometry::Point;

/// The best placement found in one round of the sheet packer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOption {
    /// Index of the part within the parts handed to the packer
    pub part_idx: usize,
    pub orientation: Orientation,
    pub anchor: Point,
    pub score: PlacementScore,
}

/// Fills a single, initially empty sheet with `parts`.
///
/// Every round evaluates every unplaced part in every orientation at every valid candidate position
/// and commits the single best scoring placement. The sheet is done once no unplaced part fits anymore.
/// Returns the indices (into `parts`) of the placed parts together with their placements, in placement order.
pub fn pack_sheet(
    parts: &[NestingPart],
    options: &NestingOptions,
    config: &BLFConfig,
    position_counter: &mut usize,
) -> Vec<(usize, PlacedPart)> {
    let mut occupied: Vec<OccupiedSpace> = vec![];
    let mut placed = vec![false; parts.len()];
    let mut placements = vec![];

    while let Some(p_opt) = best_placement(parts, &placed, &occupied, options, config, position_counter) {
        let part = &parts[p_opt.part_idx];
        let placed_part = PlacedPart::new(part.clone(), p_opt.anchor, p_opt.orientation.rotated);
        debug!(
            "[BLF] placing part {} ({}x{}, rotated: {}) at ({}, {}) with score {}",
            part.id,
            placed_part.width(),
            placed_part.height(),
            placed_part.rotated,
            placed_part.x,
            placed_part.y,
            p_opt.score.value()
        );
        occupied.push(placed_part.footprint(options.spacing));
        placed[p_opt.part_idx] = true;
        placements.push((p_opt.part_idx, placed_part));
    }
    placements
}

/// Searches the highest scoring placement among all parts not yet `placed`.
/// Ties are resolved in favour of the first one encountered: parts in the given order,
/// then orientations and positions in generation order.
pub fn best_placement(
    parts: &[NestingPart],
    placed: &[bool],
    occupied: &[OccupiedSpace],
    options: &NestingOptions,
    config: &BLFConfig,
    position_counter: &mut usize,
) -> Option<PlacementOption> {
    let usable = options.usable_area();
    let spacing = options.spacing;
    let mut best: Option<PlacementOption> = None;

    //parts identical to one evaluated earlier in this round can never score strictly higher
    let mut evaluated: Vec<(f32, f32, PartShape)> = vec![];

    for (part_idx, part) in parts.iter().enumerate().filter(|(i, _)| !placed[*i]) {
        let key = (part.width, part.height, part.shape);
        if evaluated.contains(&key) {
            continue;
        }
        evaluated.push(key);

        for orientation in orientations(part, options.allow_rotation) {
            let Orientation { width, height, .. } = orientation;
            let positions = candidate_positions(
                width,
                height,
                spacing,
                occupied,
                usable,
                config.max_grid_positions,
            );
            *position_counter += positions.len();

            for anchor in positions {
                if !is_valid_position(anchor, width, height, spacing, occupied, usable) {
                    continue;
                }
                let s = score(anchor, width, height, spacing, occupied, usable, &config.score_weights);
                if best.is_none_or(|b| s > b.score) {
                    best = Some(PlacementOption {
                        part_idx,
                        orientation,
                        anchor,
                        score: s,
                    });
                }
            }
        }
    }
    best
}

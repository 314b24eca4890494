use crate::entities::{NestingOptions, NestingResult, NestingSheet, PartShape};
use crate::geometry::{CollidesWith, Rect};
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of a nesting result
//Used in debug_assert!() blocks and tests

/// Every placed part lies within `[margin, sheet_width - margin] x [margin, sheet_height - margin]`
pub fn placements_within_bounds(sheet: &NestingSheet, options: &NestingOptions) -> bool {
    let bounds = Rect {
        x_min: options.margin,
        y_min: options.margin,
        x_max: options.sheet_width - options.margin,
        y_max: options.sheet_height - options.margin,
    };
    sheet.placements.iter().all(|pp| {
        let rect = pp.sheet_rect(options.margin);
        let inside = bounds.contains(&rect);
        if !inside {
            error!("part {} at {rect:?} exceeds the usable area {bounds:?}", pp.part.id);
        }
        inside
    })
}

/// No two spacing-grown footprints on the sheet overlap
pub fn placements_do_not_overlap(sheet: &NestingSheet, spacing: f32) -> bool {
    sheet
        .placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| {
            let (fa, fb) = (a.footprint(spacing).rect(), b.footprint(spacing).rect());
            let collides = fa.collides_with(&fb);
            if collides {
                error!("parts {} and {} overlap: {fa:?} and {fb:?}", a.part.id, b.part.id);
            }
            !collides
        })
}

/// Only non-circular parts are rotated, and only if rotation is allowed
pub fn rotations_legal(result: &NestingResult, options: &NestingOptions) -> bool {
    result
        .sheets
        .iter()
        .flat_map(|s| &s.placements)
        .filter(|pp| pp.rotated)
        .all(|pp| options.allow_rotation && pp.part.shape != PartShape::Circle)
}

/// Every input part is either placed exactly once or reported as unplaced
pub fn parts_conserved(result: &NestingResult, n_input_parts: usize) -> bool {
    let ids = result
        .sheets
        .iter()
        .flat_map(|s| &s.placements)
        .map(|pp| pp.part.id)
        .chain(result.unplaced_parts.iter().map(|p| p.id))
        .collect_vec();
    ids.len() == n_input_parts && ids.iter().all_unique()
}

pub fn efficiencies_in_range(result: &NestingResult) -> bool {
    let in_range = |e: f32| (0.0..=1.0).contains(&e);
    in_range(result.total_efficiency) && result.sheets.iter().all(|s| in_range(s.efficiency))
}

pub fn result_is_feasible(
    result: &NestingResult,
    options: &NestingOptions,
    n_input_parts: usize,
) -> bool {
    result.sheets.iter().all(|s| {
        placements_within_bounds(s, options) && placements_do_not_overlap(s, options.spacing)
    }) && rotations_legal(result, options)
        && parts_conserved(result, n_input_parts)
        && efficiencies_in_range(result)
}

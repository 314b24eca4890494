use crate::config::ScoreWeights;
use ordered_float::NotNan;
use sheetnest::entities::OccupiedSpace;
use sheetnest::geometry::{Point, Rect};
use sheetnest::util::FPA;

/// The score BLF assigns to a placement. Higher is better.
/// Rewards placements close to the top-left corner (the origin of the usable area),
/// touching the sheet edges or other parts, and punishes placements leaving slivers of unusable space.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct PlacementScore(NotNan<f32>);

impl PlacementScore {
    pub fn new(value: f32) -> Self {
        PlacementScore(NotNan::new(value).expect("score is NaN"))
    }

    pub fn value(&self) -> f32 {
        self.0.into_inner()
    }
}

/// Scores a part of `width` x `height` placed at `anchor`. The placement is assumed to be valid.
pub fn score(
    anchor: Point,
    width: f32,
    height: f32,
    spacing: f32,
    occupied: &[OccupiedSpace],
    usable: Rect,
    weights: &ScoreWeights,
) -> PlacementScore {
    let rect = Rect::from_anchor(anchor, width, height);
    let n_adjacent = adjacent_edge_count(&rect, spacing, occupied, usable);
    let n_gaps = small_gap_count(&rect, spacing, occupied, usable, weights.min_useful_gap);

    let value = (usable.y_max - rect.y_min) * weights.y_weight
        + (usable.x_max - rect.x_min) * weights.x_weight
        + n_adjacent as f32 * weights.adjacency_bonus
        - n_gaps as f32 * weights.gap_penalty;

    PlacementScore::new(value)
}

/// Number of sheet edges the part touches plus the number of occupied spaces it borders.
///
/// Right and bottom sheet edges count as touched when the gap towards them does not exceed `spacing`,
/// since the part's own clearance may be all that separates them.
/// An occupied space borders the part when they are at most `spacing` apart along one axis
/// and their extents overlap along the other.
pub fn adjacent_edge_count(
    rect: &Rect,
    spacing: f32,
    occupied: &[OccupiedSpace],
    usable: Rect,
) -> usize {
    let within_spacing = |d: f32| FPA(d.abs()) <= FPA(spacing);

    let sheet_edges = [
        FPA(rect.x_min) == FPA(usable.x_min),
        FPA(rect.y_min) == FPA(usable.y_min),
        within_spacing(usable.x_max - rect.x_max),
        within_spacing(usable.y_max - rect.y_max),
    ]
    .into_iter()
    .filter(|&touches| touches)
    .count();

    let neighbours = occupied
        .iter()
        .map(|o| o.rect())
        .filter(|o| {
            let side_by_side = (within_spacing(rect.x_min - o.x_max)
                || within_spacing(o.x_min - rect.x_max))
                && rect.overlaps_vertically(o);
            let stacked = (within_spacing(rect.y_min - o.y_max)
                || within_spacing(o.y_min - rect.y_max))
                && rect.overlaps_horizontally(o);
            side_by_side || stacked
        })
        .count();

    sheet_edges + neighbours
}

/// Number of directions (right and below) in which the free strip next to the part is
/// non-empty but narrower than `min_useful_gap`.
/// The strip starts at the part's clearance and ends at the nearest occupied space or sheet edge.
pub fn small_gap_count(
    rect: &Rect,
    spacing: f32,
    occupied: &[OccupiedSpace],
    usable: Rect,
    min_useful_gap: f32,
) -> usize {
    let gap_right = occupied
        .iter()
        .map(|o| o.rect())
        .filter(|o| rect.overlaps_vertically(o) && FPA(o.x_min) >= FPA(rect.x_max))
        .map(|o| o.x_min)
        .fold(usable.x_max, f32::min)
        - (rect.x_max + spacing);

    let gap_below = occupied
        .iter()
        .map(|o| o.rect())
        .filter(|o| rect.overlaps_horizontally(o) && FPA(o.y_min) >= FPA(rect.y_max))
        .map(|o| o.y_min)
        .fold(usable.y_max, f32::min)
        - (rect.y_max + spacing);

    [gap_right, gap_below]
        .into_iter()
        .filter(|&gap| FPA(gap) > FPA(0.0) && FPA(gap) < FPA(min_useful_gap))
        .count()
}

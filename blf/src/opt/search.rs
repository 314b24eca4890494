use itertools::Itertools;
use sheetnest::entities::OccupiedSpace;
use sheetnest::geometry::{CollidesWith, Point, Rect};
use sheetnest::util::FPA;

/// Finest grid step in mm
pub const MIN_GRID_STEP: f32 = 1.0;
/// Coarsest adaptive grid step in mm, before the position budget is applied
pub const MAX_GRID_STEP: f32 = 10.0;

/// Candidate anchors (top-left corners) for a part of `width` x `height` on a sheet with the given occupied spaces.
///
/// The origin is always a candidate. Every occupied space contributes the anchors at its top-right,
/// bottom-left and bottom-right corner, as long as the part would still fit within `usable`.
/// When this yields fewer than two candidates, a grid scan of the usable area is appended.
///
/// Candidates are not necessarily valid, see [`is_valid_position`].
pub fn candidate_positions(
    width: f32,
    height: f32,
    spacing: f32,
    occupied: &[OccupiedSpace],
    usable: Rect,
    max_grid_positions: usize,
) -> Vec<Point> {
    let fits = |p: &Point| {
        FPA(p.x() + width) <= FPA(usable.x_max) && FPA(p.y() + height) <= FPA(usable.y_max)
    };

    let mut positions = vec![Point(0.0, 0.0)];
    positions.extend(
        occupied
            .iter()
            .flat_map(|o| {
                [
                    Point(o.x_max(), o.y),
                    Point(o.x, o.y_max()),
                    Point(o.x_max(), o.y_max()),
                ]
            })
            .filter(fits),
    );

    if positions.len() < 2 {
        positions.extend(grid_positions(width, height, spacing, usable, max_grid_positions));
    }
    positions
}

/// A part placed at `anchor` is valid if its footprint, grown by `spacing`, lies within `usable`
/// and does not collide with any occupied space.
pub fn is_valid_position(
    anchor: Point,
    width: f32,
    height: f32,
    spacing: f32,
    occupied: &[OccupiedSpace],
    usable: Rect,
) -> bool {
    let footprint = Rect::from_anchor(anchor, width, height).grow(spacing);
    usable.contains(&footprint) && !occupied.iter().any(|o| o.rect().collides_with(&footprint))
}

/// Adaptive grid step for a part: a tenth of its smallest side, clamped to [`MIN_GRID_STEP`, `MAX_GRID_STEP`]
pub fn grid_step(width: f32, height: f32) -> f32 {
    (f32::min(width, height) / 10.0).clamp(MIN_GRID_STEP, MAX_GRID_STEP)
}

/// Row-major scan (top to bottom, left to right) of all anchors at which the spacing-grown part stays within `usable`.
///
/// Each axis is sampled at multiples of the step, plus its far end so parts can be flush against the right and bottom edge.
/// Whenever the scan would exceed `max_positions`, the step is doubled until it no longer does.
pub fn grid_positions(
    width: f32,
    height: f32,
    spacing: f32,
    usable: Rect,
    max_positions: usize,
) -> Vec<Point> {
    let span_x = usable.width() - width - spacing;
    let span_y = usable.height() - height - spacing;
    if FPA(span_x) < FPA(0.0) || FPA(span_y) < FPA(0.0) {
        //the part does not fit on the sheet at all
        return vec![];
    }
    let (span_x, span_y) = (span_x.max(0.0), span_y.max(0.0));

    let mut step = grid_step(width, height);
    while axis_sample_count(span_x, step) * axis_sample_count(span_y, step) > max_positions
        && step <= f32::max(span_x, span_y)
    {
        step *= 2.0;
    }

    let xs = axis_samples(span_x, step);
    let ys = axis_samples(span_y, step);
    ys.iter()
        .cartesian_product(xs.iter())
        .map(|(&y, &x)| Point(usable.x_min + x, usable.y_min + y))
        .take(max_positions.max(1))
        .collect()
}

/// Length of [`axis_samples`] for the same arguments, without allocating
fn axis_sample_count(span: f32, step: f32) -> usize {
    let n_steps = (span / step).floor() as usize;
    match FPA(n_steps as f32 * step) < FPA(span) {
        true => n_steps + 2,
        false => n_steps + 1,
    }
}

/// Offsets `0, step, 2*step, ...` up to `span`, ending exactly at `span`
fn axis_samples(span: f32, step: f32) -> Vec<f32> {
    let n_steps = (span / step).floor() as usize;
    let mut samples = (0..=n_steps).map(|i| i as f32 * step).collect_vec();
    if samples.last().is_some_and(|&last| FPA(last) < FPA(span)) {
        samples.push(span);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn usable() -> Rect {
        Rect::try_new(0.0, 0.0, 2380.0, 1180.0).unwrap()
    }

    #[test_case(700.0, 700.0, 10.0; "large part")]
    #[test_case(30.0, 200.0, 3.0; "narrow part")]
    #[test_case(5.0, 5.0, 1.0; "tiny part")]
    fn grid_step_is_clamped(w: f32, h: f32, expected: f32) {
        assert_eq!(grid_step(w, h), expected);
    }

    #[test]
    fn axis_samples_end_at_span() {
        assert_eq!(axis_samples(25.0, 10.0), vec![0.0, 10.0, 20.0, 25.0]);
        assert_eq!(axis_samples(20.0, 10.0), vec![0.0, 10.0, 20.0]);
        assert_eq!(axis_samples(0.0, 10.0), vec![0.0]);
    }

    #[test_case(25.0, 10.0; "span not flush with step")]
    #[test_case(20.0, 10.0; "span flush with step")]
    #[test_case(0.0, 10.0; "empty span")]
    #[test_case(2375.0, 1.0; "fine step")]
    #[test_case(1999990.0, 2.0; "huge span")]
    fn sample_count_matches_samples(span: f32, step: f32) {
        assert_eq!(axis_sample_count(span, step), axis_samples(span, step).len());
    }

    #[test]
    fn corner_anchors_are_not_limited_by_grid_budget() {
        let occupied = (0..4)
            .map(|i| OccupiedSpace { x: i as f32 * 110.0, y: 0.0, w: 110.0, h: 110.0 })
            .collect_vec();
        let positions = candidate_positions(100.0, 100.0, 10.0, &occupied, usable(), 1);
        assert_eq!(positions.len(), 1 + 3 * occupied.len());
    }

    #[test]
    fn empty_sheet_falls_back_to_grid() {
        let positions = candidate_positions(600.0, 400.0, 10.0, &[], usable(), 5000);
        assert_eq!(positions[0], Point(0.0, 0.0));
        assert!(positions.len() > 2);
        assert!(positions.len() <= 5001);
        assert!(
            positions
                .iter()
                .all(|p| is_valid_position(*p, 600.0, 400.0, 10.0, &[], usable()))
        );
    }

    #[test]
    fn grid_respects_budget() {
        for budget in [4, 100, 5000] {
            let positions = grid_positions(5.0, 5.0, 0.0, usable(), budget);
            assert!(!positions.is_empty());
            assert!(positions.len() <= budget, "{} > {budget}", positions.len());
        }
    }

    #[test]
    fn grid_is_empty_for_oversized_parts() {
        assert!(grid_positions(2400.0, 100.0, 10.0, usable(), 5000).is_empty());
        assert!(grid_positions(2380.0, 100.0, 10.0, usable(), 5000).is_empty());
        assert_eq!(grid_positions(2370.0, 1170.0, 10.0, usable(), 5000), vec![Point(0.0, 0.0)]);
    }

    #[test]
    fn occupied_spaces_contribute_corner_anchors() {
        let occupied = [OccupiedSpace { x: 0.0, y: 0.0, w: 710.0, h: 710.0 }];
        let positions = candidate_positions(700.0, 300.0, 10.0, &occupied, usable(), 5000);
        assert_eq!(
            positions,
            vec![
                Point(0.0, 0.0),
                Point(710.0, 0.0),
                Point(0.0, 710.0),
                Point(710.0, 710.0),
            ]
        );
        assert!(!is_valid_position(positions[0], 700.0, 300.0, 10.0, &occupied, usable()));
        assert!(positions[1..]
            .iter()
            .all(|p| is_valid_position(*p, 700.0, 300.0, 10.0, &occupied, usable())));
    }

    #[test]
    fn anchors_beyond_the_sheet_are_dropped() {
        let occupied = [OccupiedSpace { x: 0.0, y: 0.0, w: 2130.0, h: 710.0 }];
        let positions = candidate_positions(700.0, 700.0, 10.0, &occupied, usable(), 100);
        //only the origin survives the filter, so the grid is scanned as well
        assert_eq!(positions[0], Point(0.0, 0.0));
        assert!(positions.len() > 1);
        assert!(
            !positions
                .iter()
                .any(|p| is_valid_position(*p, 700.0, 700.0, 10.0, &occupied, usable()))
        );
    }
}

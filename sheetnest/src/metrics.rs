use crate::entities::{NestingOptions, PlacedPart};

/// Area of a sheet available for parts: the sheet minus its margins on every side.
/// Negative when the margins overlap.
pub fn usable_sheet_area(options: &NestingOptions) -> f32 {
    options.usable_width() * options.usable_height()
}

/// Sum of the material consumed by the placed parts
pub fn used_area<'a>(placements: impl IntoIterator<Item = &'a PlacedPart>) -> f32 {
    placements.into_iter().map(|pp| pp.part.area()).sum()
}

/// Fraction of `usable_area` covered by `used_area`, always within [0, 1].
/// Degenerate sheets (no usable area) have an efficiency of 0.
pub fn efficiency(used_area: f32, usable_area: f32) -> f32 {
    if usable_area <= 0.0 {
        return 0.0;
    }
    (used_area / usable_area).clamp(0.0, 1.0)
}

/// Utilization figures of a single sheet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetMetrics {
    pub used_area: f32,
    pub usable_area: f32,
    pub efficiency: f32,
    pub wasted_area: f32,
}

impl SheetMetrics {
    pub fn compute(placements: &[PlacedPart], options: &NestingOptions) -> Self {
        let used_area = used_area(placements);
        let usable_area = usable_sheet_area(options);
        SheetMetrics {
            used_area,
            usable_area,
            efficiency: efficiency(used_area, usable_area),
            wasted_area: (usable_area - used_area).max(0.0),
        }
    }
}

/// Aggregated utilization over all produced sheets
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TotalMetrics {
    pub efficiency: f32,
    pub wasted_area: f32,
}

impl TotalMetrics {
    pub fn aggregate<'a>(sheets: impl IntoIterator<Item = &'a SheetMetrics>) -> Self {
        let (used, usable, wasted) = sheets
            .into_iter()
            .fold((0.0, 0.0, 0.0), |(used, usable, wasted), m| {
                (used + m.used_area, usable + m.usable_area, wasted + m.wasted_area)
            });
        TotalMetrics {
            efficiency: efficiency(used, usable),
            wasted_area: wasted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NestingPart;
    use crate::geometry::Point;
    use float_cmp::approx_eq;

    #[test]
    fn single_part_metrics() {
        let opts = NestingOptions::default();
        let placed = vec![PlacedPart::new(
            NestingPart::rectangle(0, 600.0, 400.0),
            Point(0.0, 0.0),
            false,
        )];
        let m = SheetMetrics::compute(&placed, &opts);
        assert_eq!(m.usable_area, 2380.0 * 1180.0);
        assert_eq!(m.used_area, 240_000.0);
        assert!(approx_eq!(f32, m.efficiency, 240_000.0 / 2_808_400.0, ulps = 4));
        assert_eq!(m.wasted_area, 2_808_400.0 - 240_000.0);
    }

    #[test]
    fn zero_usable_area_has_zero_efficiency() {
        assert_eq!(efficiency(100.0, 0.0), 0.0);
        assert_eq!(efficiency(100.0, -50.0), 0.0);
        assert_eq!(efficiency(0.0, 100.0), 0.0);
    }

    #[test]
    fn aggregate_weights_by_area() {
        let a = SheetMetrics {
            used_area: 50.0,
            usable_area: 100.0,
            efficiency: 0.5,
            wasted_area: 50.0,
        };
        let b = SheetMetrics {
            used_area: 10.0,
            usable_area: 100.0,
            efficiency: 0.1,
            wasted_area: 90.0,
        };
        let total = TotalMetrics::aggregate([&a, &b]);
        assert!(approx_eq!(f32, total.efficiency, 0.3, ulps = 4));
        assert_eq!(total.wasted_area, 140.0);
        assert_eq!(TotalMetrics::aggregate(&Vec::<SheetMetrics>::new()), TotalMetrics::default());
    }
}

use crate::entities::NestingPart;
use crate::geometry::Rect;
use anyhow::{Result, ensure};
use itertools::Itertools;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Order in which parts are presented to the packer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    #[default]
    Area,
    Width,
    Height,
    Perimeter,
    None,
}

impl SortStrategy {
    /// Returns the parts ordered by descending key. The sort is stable: parts with equal keys keep their input order.
    pub fn apply(&self, parts: &[NestingPart]) -> Vec<NestingPart> {
        let key: fn(&NestingPart) -> f32 = match self {
            SortStrategy::None => return parts.to_vec(),
            SortStrategy::Area => NestingPart::area,
            SortStrategy::Width => |p| p.width,
            SortStrategy::Height => |p| p.height,
            SortStrategy::Perimeter => NestingPart::perimeter,
        };
        parts
            .iter()
            .sorted_by_cached_key(|p| Reverse(NotNan::new(key(p)).expect("part dimension is NaN")))
            .cloned()
            .collect_vec()
    }
}

/// Sheet dimensions and packing rules, all lengths in mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingOptions {
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Unusable border along every edge of the sheet
    pub margin: f32,
    /// Minimum gap between two placed parts
    pub spacing: f32,
    /// Allow parts to be turned by 90°
    pub allow_rotation: bool,
    #[serde(default)]
    pub sort_strategy: SortStrategy,
}

impl NestingOptions {
    /// Checks the options describe a usable sheet.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sheet_width.is_finite() && self.sheet_width > 0.0,
            "sheet width must be positive, got {}",
            self.sheet_width
        );
        ensure!(
            self.sheet_height.is_finite() && self.sheet_height > 0.0,
            "sheet height must be positive, got {}",
            self.sheet_height
        );
        ensure!(
            self.margin.is_finite() && self.margin >= 0.0,
            "margin must be non-negative, got {}",
            self.margin
        );
        ensure!(
            self.spacing.is_finite() && self.spacing >= 0.0,
            "spacing must be non-negative, got {}",
            self.spacing
        );
        Ok(())
    }

    pub fn usable_width(&self) -> f32 {
        self.sheet_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.sheet_height - 2.0 * self.margin
    }

    /// The region parts may be placed in, relative to its own top-left corner.
    /// Collapses to an empty rectangle when the margins consume the whole sheet.
    pub fn usable_area(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.usable_width().max(0.0),
            y_max: self.usable_height().max(0.0),
        }
    }
}

impl Default for NestingOptions {
    fn default() -> Self {
        Self {
            sheet_width: 2400.0,
            sheet_height: 1200.0,
            margin: 10.0,
            spacing: 10.0,
            allow_rotation: true,
            sort_strategy: SortStrategy::Area,
        }
    }
}

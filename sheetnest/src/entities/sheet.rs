use crate::entities::{NestingOptions, PlacedPart};
use crate::metrics::SheetMetrics;
use serde::{Deserialize, Serialize};

/// A single stock sheet and the parts placed on it, in placement order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingSheet {
    pub placements: Vec<PlacedPart>,
    /// Fraction of the usable area consumed by parts, in [0, 1]
    pub efficiency: f32,
    /// Usable area not consumed by parts, in mm²
    pub wasted_area: f32,
}

impl NestingSheet {
    pub fn new(placements: Vec<PlacedPart>, options: &NestingOptions) -> Self {
        let SheetMetrics {
            efficiency,
            wasted_area,
            ..
        } = SheetMetrics::compute(&placements, options);
        NestingSheet {
            placements,
            efficiency,
            wasted_area,
        }
    }

    pub fn metrics(&self, options: &NestingOptions) -> SheetMetrics {
        SheetMetrics::compute(&self.placements, options)
    }

    pub fn used_area(&self) -> f32 {
        crate::metrics::used_area(&self.placements)
    }
}

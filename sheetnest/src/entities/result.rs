use crate::entities::{NestingOptions, NestingPart, NestingSheet};
use crate::metrics::TotalMetrics;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Outcome of nesting a list of parts: the sheets used and the parts that did not fit on any sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    pub sheets: Vec<NestingSheet>,
    /// Used area divided by the usable area, over all sheets
    pub total_efficiency: f32,
    pub total_wasted_area: f32,
    pub unplaced_parts: Vec<NestingPart>,
}

impl NestingResult {
    pub fn new(
        sheets: Vec<NestingSheet>,
        unplaced_parts: Vec<NestingPart>,
        options: &NestingOptions,
    ) -> Self {
        let sheet_metrics = sheets.iter().map(|s| s.metrics(options)).collect_vec();
        let TotalMetrics {
            efficiency,
            wasted_area,
        } = TotalMetrics::aggregate(&sheet_metrics);

        NestingResult {
            sheets,
            total_efficiency: efficiency,
            total_wasted_area: wasted_area,
            unplaced_parts,
        }
    }

    /// Number of stock sheets required to cut every placed part
    pub fn sheets_needed(&self) -> usize {
        self.sheets.len()
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    pub fn all_placed(&self) -> bool {
        self.unplaced_parts.is_empty()
    }

    /// Whether the preview part made it onto a sheet.
    /// `None` if the input contained no preview part.
    pub fn preview_placed(&self) -> Option<bool> {
        let placed = self
            .sheets
            .iter()
            .flat_map(|s| &s.placements)
            .any(|pp| pp.part.is_preview);
        let unplaced = self.unplaced_parts.iter().any(|p| p.is_preview);
        match (placed, unplaced) {
            (false, false) => None,
            (placed, _) => Some(placed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlacedPart;
    use crate::geometry::Point;

    #[test]
    fn empty_result_has_zero_efficiency() {
        let res = NestingResult::new(vec![], vec![], &NestingOptions::default());
        assert_eq!(res.sheets_needed(), 0);
        assert_eq!(res.total_efficiency, 0.0);
        assert_eq!(res.total_wasted_area, 0.0);
        assert_eq!(res.preview_placed(), None);
    }

    #[test]
    fn preview_part_is_tracked() {
        let opts = NestingOptions::default();
        let preview = NestingPart::rectangle(1, 100.0, 100.0).as_preview();
        let sheet = NestingSheet::new(
            vec![PlacedPart::new(preview.clone(), Point(0.0, 0.0), false)],
            &opts,
        );
        let placed = NestingResult::new(vec![sheet], vec![], &opts);
        assert_eq!(placed.preview_placed(), Some(true));

        let unplaced = NestingResult::new(vec![], vec![preview], &opts);
        assert_eq!(unplaced.preview_placed(), Some(false));
        assert!(!unplaced.all_placed());
    }
}

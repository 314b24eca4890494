use std::time::Instant;

use crate::config::BLFConfig;
use crate::opt::sheet_packer::pack_sheet;
use itertools::Itertools;
use log::{debug, info, warn};
use sheetnest::entities::{NestingOptions, NestingPart, NestingResult, NestingSheet};
use sheetnest::util::assertions;
use thousands::Separable;

/// Bottom-Left-Fill (BLF) optimizer, nests parts onto as many sheets as required.
/// Holds no state between runs: every call to [`BLFOptimizer::solve`] starts from scratch.
pub struct BLFOptimizer {
    pub options: NestingOptions,
    pub config: BLFConfig,
}

impl BLFOptimizer {
    pub fn new(options: NestingOptions, config: BLFConfig) -> Self {
        Self { options, config }
    }

    pub fn solve(&self, parts: &[NestingPart]) -> NestingResult {
        let start = Instant::now();
        let mut position_counter = 0;

        let mut remaining = self.options.sort_strategy.apply(parts);
        let mut sheets = vec![];
        let mut unplaced = vec![];

        while !remaining.is_empty() {
            let placements = pack_sheet(&remaining, &self.options, &self.config, &mut position_counter);
            if placements.is_empty() {
                //not a single remaining part fits on an empty sheet
                warn!(
                    "[BLF] {} part(s) do not fit on an empty {}x{} sheet",
                    remaining.len(),
                    self.options.sheet_width,
                    self.options.sheet_height
                );
                unplaced = std::mem::take(&mut remaining);
                break;
            }

            let mut placed = vec![false; remaining.len()];
            placements.iter().for_each(|(idx, _)| placed[*idx] = true);
            remaining = remaining
                .into_iter()
                .zip(placed)
                .filter_map(|(part, placed)| (!placed).then_some(part))
                .collect_vec();

            let sheet = NestingSheet::new(
                placements.into_iter().map(|(_, pp)| pp).collect_vec(),
                &self.options,
            );
            info!(
                "[BLF] sheet {} holds {} parts with an efficiency of {:.3}%, {} parts remaining",
                sheets.len(),
                sheet.placements.len(),
                sheet.efficiency * 100.0,
                remaining.len()
            );
            sheets.push(sheet);
        }

        let result = NestingResult::new(sheets, unplaced, &self.options);
        debug_assert!(assertions::result_is_feasible(&result, &self.options, parts.len()));

        info!(
            "[BLF] nesting finished in {:.3}ms ({} candidate positions)",
            start.elapsed().as_secs_f64() * 1000.0,
            position_counter.separate_with_commas()
        );
        info!(
            "[BLF] {}/{} parts placed on {} sheet(s) with a total efficiency of {:.3}%",
            result.placed_count(),
            parts.len(),
            result.sheets_needed(),
            result.total_efficiency * 100.0
        );
        debug!("[BLF] unplaced parts: {:?}", result.unplaced_parts.iter().map(|p| p.id).collect_vec());
        result
    }
}

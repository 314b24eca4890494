//! Bottom-Left-Fill nesting of rectangles and circles onto fixed-size stock sheets.
//!
//! Parts are placed one at a time: in every round, all unplaced parts are tried in every allowed
//! orientation at every candidate position, and the best scoring placement is committed.
//! A sheet is closed once nothing fits anymore and the remaining parts move on to a fresh sheet.

use sheetnest::entities::{NestingOptions, NestingPart, NestingResult};
use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

use crate::config::BLFConfig;
use crate::opt::blf_optimizer::BLFOptimizer;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Nests `parts` onto sheets described by `options`, using the default [`BLFConfig`].
///
/// Pure and deterministic: identical inputs always produce identical results.
pub fn nest(parts: &[NestingPart], options: &NestingOptions) -> NestingResult {
    BLFOptimizer::new(*options, BLFConfig::default()).solve(parts)
}

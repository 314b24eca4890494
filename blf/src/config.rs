use serde::{Deserialize, Serialize};

/// Configuration for the BLF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BLFConfig {
    /// Weights of the placement score
    #[serde(default)]
    pub score_weights: ScoreWeights,
    /// Upper bound on the number of grid positions scanned per part orientation.
    /// The grid step is coarsened until the scan fits within this budget.
    /// Only the fallback grid scan is limited: the origin and the corner anchors of the
    /// occupied spaces (three per space) are always evaluated.
    pub max_grid_positions: usize,
}

impl Default for BLFConfig {
    fn default() -> Self {
        Self {
            score_weights: ScoreWeights::default(),
            max_grid_positions: 5000,
        }
    }
}

/// Empirical constants of the placement score.
/// `score = (usable_height - y) * y_weight + (usable_width - x) * x_weight
///          + adjacent_edges * adjacency_bonus - small_gaps * gap_penalty`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Reward per mm of distance to the bottom of the usable area
    pub y_weight: f32,
    /// Reward per mm of distance to the right of the usable area
    pub x_weight: f32,
    /// Reward per sheet edge or neighbouring part the placement touches
    pub adjacency_bonus: f32,
    /// Penalty per direction (right, below) in which the placement leaves a sliver of free space
    pub gap_penalty: f32,
    /// Free space narrower than this (in mm) is considered a sliver
    pub min_useful_gap: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            y_weight: 10.0,
            x_weight: 5.0,
            adjacency_bonus: 50.0,
            gap_penalty: 100.0,
            min_useful_gap: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_default_weights() {
        let config: BLFConfig = serde_json::from_str(r#"{"max_grid_positions": 200}"#).unwrap();
        assert_eq!(config.max_grid_positions, 200);
        assert_eq!(config.score_weights, ScoreWeights::default());
    }
}

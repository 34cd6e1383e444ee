//! Weighted-trial scoreline model
//!
//! A toy generator, not a calibrated predictor: each match is a fixed
//! number of independent scoring trials per side, with the per-trial
//! chance scaled by the club's quality level.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scoring trials per simulated match.
pub const TRIALS_PER_MATCH: u32 = 12;

/// Per-trial scoring chance contributed by one quality level.
pub const CHANCE_PER_QUALITY_LEVEL: f64 = 0.05;

/// A generated scoreline, home goals first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: u8,
    pub away: u8,
}

impl std::fmt::Display for Scoreline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Parameters of the scoreline generator.
///
/// Precondition: `chance_per_level * quality` must stay at or below 1.
/// With the default chance and qualities in [1, 5] the per-trial
/// probability ranges over [0.05, 0.25]; the model does not clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringModel {
    pub trials: u32,
    pub chance_per_level: f64,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            trials: TRIALS_PER_MATCH,
            chance_per_level: CHANCE_PER_QUALITY_LEVEL,
        }
    }
}

impl ScoringModel {
    /// Generate a scoreline from the two clubs' quality levels.
    ///
    /// Pure function of the qualities and the RNG: each trial draws two
    /// independent uniforms in [0, 1), one per side, and a side scores
    /// whenever its draw falls below `chance_per_level * quality`.
    pub fn scoreline<R: Rng>(&self, home_quality: u8, away_quality: u8, rng: &mut R) -> Scoreline {
        let home_chance = self.chance_per_level * home_quality as f64;
        let away_chance = self.chance_per_level * away_quality as f64;

        let mut home = 0u8;
        let mut away = 0u8;
        for _ in 0..self.trials {
            if rng.gen::<f64>() < home_chance {
                home += 1;
            }
            if rng.gen::<f64>() < away_chance {
                away += 1;
            }
        }
        Scoreline { home, away }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;

//! Club record: identity, accumulated statistics and quality rating

use serde::{Deserialize, Serialize};

/// A participant in the league.
///
/// All counters start at zero and only ever increase; there are no
/// corrections or undo. `quality` is fixed at creation and is only read
/// by the match simulator, never by the ranking rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Scoring strength knob in [1, 5], used only by the simulator.
    pub quality: u8,
}

impl Club {
    pub fn new(name: &str, quality: u8) -> Self {
        Self {
            name: name.to_string(),
            points: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            quality,
        }
    }

    /// Goals scored minus goals conceded. Computed on demand, never stored.
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

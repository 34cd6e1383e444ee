//! Season runner: simulate a fixed schedule matchday by matchday

use log::info;
use serde::{Deserialize, Serialize};

use league_core::{League, LeagueError, TableRow};

use crate::model::ScoringModel;
use crate::play_match;
use crate::schedule::Schedule;

/// One simulated match with its generated scoreline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMatch {
    pub home: String,
    pub away: String,
    pub home_goals: u8,
    pub away_goals: u8,
}

/// What happened on one matchday: the results plus the standings after
/// they were all applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchdayReport {
    pub matchday: u32,
    pub results: Vec<PlayedMatch>,
    pub standings: Vec<TableRow>,
}

/// Simulates a full double round robin over a roster.
#[derive(Debug, Clone, Default)]
pub struct SeasonRunner {
    pub model: ScoringModel,
}

impl SeasonRunner {
    pub fn new(model: ScoringModel) -> Self {
        Self { model }
    }

    /// Simulate every matchday of the fixed schedule, applying each
    /// result to the league as it is generated.
    ///
    /// The schedule is computed once from the roster's order; it does not
    /// follow the live standings. A roster name missing from the league
    /// fails the whole run up front with `TeamNotFound` before any match
    /// is played: a roster/league mismatch is a caller bug, not a
    /// per-entry condition.
    pub fn run<R: rand::Rng>(
        &self,
        league: &mut League,
        roster: &[String],
        rng: &mut R,
    ) -> Result<Vec<MatchdayReport>, LeagueError> {
        for name in roster {
            if league.club(name).is_none() {
                return Err(LeagueError::TeamNotFound(name.clone()));
            }
        }

        let schedule = Schedule::double_round_robin(roster);
        let mut reports = Vec::with_capacity(schedule.matchday_count());

        for (day_idx, fixtures) in schedule.matchdays.iter().enumerate() {
            let matchday = day_idx as u32 + 1;
            info!("simulating matchday {matchday}");

            let mut results = Vec::with_capacity(fixtures.len());
            for fixture in fixtures {
                let score = play_match(league, &self.model, &fixture.home, &fixture.away, rng)?;
                results.push(PlayedMatch {
                    home: fixture.home.clone(),
                    away: fixture.away.clone(),
                    home_goals: score.home,
                    away_goals: score.away,
                });
            }

            reports.push(MatchdayReport {
                matchday,
                results,
                standings: league.ranking(),
            });
        }

        Ok(reports)
    }
}

#[cfg(test)]
#[path = "season_tests.rs"]
mod season_tests;

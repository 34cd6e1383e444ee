//! Match simulator for the league
//!
//! This crate provides:
//! - A weighted-trial scoreline generator driven by club quality levels
//! - Single-match simulation that feeds the result straight into the
//!   standings table
//! - A fixed round-robin schedule and a season runner producing
//!   per-matchday reports
//!
//! Randomness is always injected as `&mut impl Rng`, so callers choose
//! between an entropy-seeded generator and a fixed seed.

pub mod model;
pub mod schedule;
pub mod season;

pub use model::{Scoreline, ScoringModel, CHANCE_PER_QUALITY_LEVEL, TRIALS_PER_MATCH};
pub use schedule::{Fixture, Schedule};
pub use season::{MatchdayReport, PlayedMatch, SeasonRunner};

use log::debug;
use rand::Rng;

use league_core::{League, LeagueError};

/// Simulate one match and apply the result to the table.
///
/// A composite operation: generates a scoreline from both clubs' quality
/// levels, then records it through [`League::apply_result`]. If either
/// name is unknown (or the two names are equal) nothing is generated and
/// nothing is mutated.
pub fn play_match<R: Rng>(
    league: &mut League,
    model: &ScoringModel,
    home: &str,
    away: &str,
    rng: &mut R,
) -> Result<Scoreline, LeagueError> {
    if home == away {
        return Err(LeagueError::SameClub(home.to_string()));
    }
    let home_quality = league
        .club(home)
        .ok_or_else(|| LeagueError::TeamNotFound(home.to_string()))?
        .quality;
    let away_quality = league
        .club(away)
        .ok_or_else(|| LeagueError::TeamNotFound(away.to_string()))?
        .quality;

    let score = model.scoreline(home_quality, away_quality, rng);
    debug!("simulated {home} {score} {away}");

    league.apply_result(home, away, score.home, score.away)?;
    Ok(score)
}

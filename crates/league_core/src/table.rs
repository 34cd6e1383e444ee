//! Standings table: insertion, result application and ranking

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::club::Club;
use crate::error::LeagueError;

/// One match result to be applied to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub home: String,
    pub away: String,
    pub home_goals: u8,
    pub away_goals: u8,
}

impl ResultEntry {
    pub fn new(home: &str, away: &str, home_goals: u8, away_goals: u8) -> Self {
        Self {
            home: home.to_string(),
            away: away.to_string(),
            home_goals,
            away_goals,
        }
    }
}

/// Display record for one row of the standings.
///
/// Snapshot of a club's counters with the goal difference computed fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
}

impl TableRow {
    fn from_club(club: &Club) -> Self {
        Self {
            name: club.name.clone(),
            points: club.points,
            played: club.played,
            won: club.won,
            drawn: club.drawn,
            lost: club.lost,
            goals_for: club.goals_for,
            goals_against: club.goals_against,
            goal_difference: club.goal_difference(),
        }
    }
}

/// Ranking rule: points, then goal difference, then goals scored (all
/// descending), then name ascending as the final tie-break.
///
/// Names are unique within a league, so the order is strict and total:
/// no two distinct clubs ever compare equal.
fn compare_clubs(a: &Club, b: &Club) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.cmp(&b.name))
}

/// The standings table for one league instance.
///
/// Owns its club records; the internal order always equals the current
/// ranking immediately after any mutation, so there is no observable
/// stale state between operations.
#[derive(Debug, Clone, Default)]
pub struct League {
    clubs: Vec<Club>,
}

impl League {
    pub fn new() -> Self {
        Self { clubs: Vec::new() }
    }

    /// Number of clubs in the table.
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Look up a club by name.
    pub fn club(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name == name)
    }

    /// Add a club with all counters zero.
    ///
    /// Rejects a name that is already in the table: duplicate names would
    /// make the ranking ambiguous.
    pub fn add_club(&mut self, name: &str, quality: u8) -> Result<(), LeagueError> {
        if self.club(name).is_some() {
            return Err(LeagueError::DuplicateClub(name.to_string()));
        }
        self.clubs.push(Club::new(name, quality));
        self.clubs.sort_by(compare_clubs);
        Ok(())
    }

    /// Apply one match result.
    ///
    /// All-or-nothing: both clubs are resolved before anything is touched,
    /// so an unknown name (or a club paired against itself) leaves the
    /// table exactly as it was.
    pub fn apply_result(
        &mut self,
        home: &str,
        away: &str,
        home_goals: u8,
        away_goals: u8,
    ) -> Result<(), LeagueError> {
        if home == away {
            return Err(LeagueError::SameClub(home.to_string()));
        }
        let home_idx = self
            .clubs
            .iter()
            .position(|c| c.name == home)
            .ok_or_else(|| LeagueError::TeamNotFound(home.to_string()))?;
        let away_idx = self
            .clubs
            .iter()
            .position(|c| c.name == away)
            .ok_or_else(|| LeagueError::TeamNotFound(away.to_string()))?;

        {
            let h = &mut self.clubs[home_idx];
            h.played += 1;
            h.goals_for += home_goals as u32;
            h.goals_against += away_goals as u32;
        }
        {
            let a = &mut self.clubs[away_idx];
            a.played += 1;
            a.goals_for += away_goals as u32;
            a.goals_against += home_goals as u32;
        }

        match home_goals.cmp(&away_goals) {
            Ordering::Greater => {
                self.clubs[home_idx].points += 3;
                self.clubs[home_idx].won += 1;
                self.clubs[away_idx].lost += 1;
            }
            Ordering::Less => {
                self.clubs[away_idx].points += 3;
                self.clubs[away_idx].won += 1;
                self.clubs[home_idx].lost += 1;
            }
            Ordering::Equal => {
                self.clubs[home_idx].points += 1;
                self.clubs[away_idx].points += 1;
                self.clubs[home_idx].drawn += 1;
                self.clubs[away_idx].drawn += 1;
            }
        }

        self.clubs.sort_by(compare_clubs);
        Ok(())
    }

    /// Apply a batch of results in order.
    ///
    /// Each entry is independently atomic; a failure on one entry does not
    /// abort the rest. The returned statuses line up with the input.
    pub fn apply_results(&mut self, entries: &[ResultEntry]) -> Vec<Result<(), LeagueError>> {
        entries
            .iter()
            .map(|e| self.apply_result(&e.home, &e.away, e.home_goals, e.away_goals))
            .collect()
    }

    /// The current ranking as display rows, best club first.
    pub fn ranking(&self) -> Vec<TableRow> {
        self.clubs.iter().map(TableRow::from_club).collect()
    }
}

/// Render standings rows as a fixed-width text table.
///
/// Presentation only; callers that need structure should use the rows
/// directly (they serialize to JSON).
pub fn render_standings(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>6} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
        "Club", "Points", "Played", "Won", "Drawn", "Lost", "GF", "GA", "GD"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>6} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
            row.name,
            row.points,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference
        ));
    }
    out
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

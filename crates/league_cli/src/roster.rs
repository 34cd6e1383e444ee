//! Roster configuration loading and validation
//!
//! A roster file is TOML with repeated `[[club]]` tables:
//!
//! ```toml
//! [[club]]
//! name = "Real Madrid"
//! quality = 5
//! ```
//!
//! Without a file, the built-in roster is the 20-club Spanish league.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use league_core::{League, LeagueError};

/// Configuration errors. Distinct from league errors: a broken roster
/// file is an input problem, not a standings condition.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse roster file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid roster: {0}")]
    Validation(String),
}

/// One club line in the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEntry {
    pub name: String,
    pub quality: u8,
}

/// The full roster: clubs in the order the season schedule will use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "club")]
    pub clubs: Vec<ClubEntry>,
}

impl RosterConfig {
    /// Load and validate a roster from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check name uniqueness and quality bounds.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.clubs.is_empty() {
            return Err(RosterError::Validation("roster has no clubs".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for entry in &self.clubs {
            if !seen.insert(entry.name.as_str()) {
                return Err(RosterError::Validation(format!(
                    "duplicate club name: {}",
                    entry.name
                )));
            }
            if !(1..=5).contains(&entry.quality) {
                return Err(RosterError::Validation(format!(
                    "quality for {} must be in 1..=5, got {}",
                    entry.name, entry.quality
                )));
            }
        }
        Ok(())
    }

    /// Build a league from this roster, returning the table and the
    /// roster order (which the season schedule is computed from).
    pub fn build_league(&self) -> Result<(League, Vec<String>), LeagueError> {
        let mut league = League::new();
        let mut order = Vec::with_capacity(self.clubs.len());
        for entry in &self.clubs {
            league.add_club(&entry.name, entry.quality)?;
            order.push(entry.name.clone());
        }
        Ok((league, order))
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        let clubs = [
            ("Real Madrid", 5),
            ("Barcelona", 5),
            ("Atletico Madrid", 4),
            ("Sevilla", 4),
            ("Valencia", 3),
            ("Real Sociedad", 3),
            ("Villarreal", 3),
            ("Athletic Bilbao", 3),
            ("Real Betis", 3),
            ("Getafe", 2),
            ("Celta Vigo", 2),
            ("Levante", 2),
            ("Granada", 2),
            ("Eibar", 2),
            ("Alaves", 2),
            ("Real Valladolid", 2),
            ("Osasuna", 2),
            ("Cadiz", 1),
            ("Elche", 1),
            ("Huesca", 1),
        ];
        Self {
            clubs: clubs
                .iter()
                .map(|(name, quality)| ClubEntry {
                    name: name.to_string(),
                    quality: *quality,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;

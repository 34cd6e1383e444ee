//! Fixed round-robin fixture list
//!
//! The schedule is computed once up front from the roster's build order
//! and never changes afterwards, so every pair of clubs is guaranteed to
//! meet exactly twice (venues swapped) no matter how the standings move.

use serde::{Deserialize, Serialize};

/// One scheduled pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
}

/// A full season's fixture list, grouped by matchday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub matchdays: Vec<Vec<Fixture>>,
}

impl Schedule {
    /// Build a double round robin over the roster via the circle method.
    ///
    /// For an even roster of N clubs this yields 2(N-1) matchdays with
    /// every club playing once per matchday; each pair meets once in each
    /// half, home and away swapped between the halves. An odd roster gets
    /// a bye seat, leaving one club idle per matchday.
    pub fn double_round_robin(roster: &[String]) -> Self {
        let mut seats: Vec<Option<&String>> = roster.iter().map(Some).collect();
        if seats.len() % 2 == 1 {
            seats.push(None);
        }
        let n = seats.len();
        if n < 2 {
            return Self { matchdays: Vec::new() };
        }

        let mut first_half: Vec<Vec<Fixture>> = Vec::with_capacity(n - 1);
        for round in 0..n - 1 {
            let mut fixtures = Vec::with_capacity(n / 2);
            for i in 0..n / 2 {
                if let (Some(x), Some(y)) = (seats[i], seats[n - 1 - i]) {
                    // Alternate venues per round so home games spread out.
                    let (home, away) = if round % 2 == 0 { (x, y) } else { (y, x) };
                    fixtures.push(Fixture {
                        home: home.clone(),
                        away: away.clone(),
                    });
                }
            }
            first_half.push(fixtures);
            // Keep seat 0 fixed, rotate the rest one step.
            seats[1..].rotate_right(1);
        }

        let second_half: Vec<Vec<Fixture>> = first_half
            .iter()
            .map(|fixtures| {
                fixtures
                    .iter()
                    .map(|f| Fixture {
                        home: f.away.clone(),
                        away: f.home.clone(),
                    })
                    .collect()
            })
            .collect();

        let mut matchdays = first_half;
        matchdays.extend(second_half);
        Self { matchdays }
    }

    pub fn matchday_count(&self) -> usize {
        self.matchdays.len()
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;

//! Typed errors for standings operations

use thiserror::Error;

/// Errors raised by [`crate::League`] operations.
///
/// All of these are non-fatal: the table is left untouched and further
/// operations are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    /// A named team does not exist in the table.
    #[error("team not found in the league: {0}")]
    TeamNotFound(String),

    /// A club with this name is already in the table.
    #[error("club already exists in the league: {0}")]
    DuplicateClub(String),

    /// A result or simulation paired a club against itself.
    #[error("a club cannot play against itself: {0}")]
    SameClub(String),
}

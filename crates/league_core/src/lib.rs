//! League standings core
//!
//! This crate provides the domain model for a round-robin league:
//! - Club records with accumulated statistics
//! - A standings table with a deterministic total ranking order
//! - Atomic result application (single results and batches)
//!
//! Match generation lives in the `simulator` crate; this crate only knows
//! how to record results and rank the table.

pub mod club;
pub mod error;
pub mod table;

pub use club::Club;
pub use error::LeagueError;
pub use table::{render_standings, League, ResultEntry, TableRow};

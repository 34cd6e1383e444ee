//! liga — round-robin league standings and match simulation
//!
//! ```bash
//! # Print the built-in roster's table
//! liga table
//!
//! # Record a result and show the updated table
//! liga result "Real Madrid" "Barcelona" 2 1
//!
//! # Simulate a reproducible full season
//! liga season --seed 7 --final-only
//! ```

mod interactive;
mod roster;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use league_core::{render_standings, League, ResultEntry};
use simulator::{play_match, MatchdayReport, ScoringModel, SeasonRunner};

use crate::roster::RosterConfig;

#[derive(Parser)]
#[command(name = "liga")]
#[command(about = "Round-robin league standings and match simulation")]
#[command(version)]
struct Cli {
    /// Roster TOML file (defaults to the built-in 20-club roster)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current ranking of the configured roster
    Table,
    /// Apply one match result and print the updated table
    Result {
        home: String,
        away: String,
        home_goals: u8,
        away_goals: u8,
    },
    /// Apply a JSON file of result entries; failures do not abort the rest
    Results {
        file: PathBuf,
    },
    /// Simulate one match and print the scoreline and updated table
    Simulate {
        home: String,
        away: String,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate the full round-robin season
    Season {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the full season report as JSON
        #[arg(long)]
        json: bool,
        /// Print only the final table
        #[arg(long)]
        final_only: bool,
    },
    /// Menu-driven interactive shell
    Interactive,
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = match &cli.roster {
        Some(path) => match RosterConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading roster: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => RosterConfig::default(),
    };

    let (mut league, order) = match config.build_league() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error building league: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Table => {
            print!("{}", render_standings(&league.ranking()));
            ExitCode::SUCCESS
        }
        Commands::Result {
            home,
            away,
            home_goals,
            away_goals,
        } => match league.apply_result(&home, &away, home_goals, away_goals) {
            Ok(()) => {
                print!("{}", render_standings(&league.ranking()));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Results { file } => run_results(&mut league, &file),
        Commands::Simulate { home, away, seed } => {
            let mut rng = rng_from(seed);
            match play_match(&mut league, &ScoringModel::default(), &home, &away, &mut rng) {
                Ok(score) => {
                    println!("{home} {score} {away}");
                    print!("{}", render_standings(&league.ranking()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Season {
            seed,
            json,
            final_only,
        } => {
            let mut rng = rng_from(seed);
            let runner = SeasonRunner::default();
            match runner.run(&mut league, &order, &mut rng) {
                Ok(reports) => {
                    print_season(&reports, json, final_only);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Interactive => {
            let mut rng = rng_from(None);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match interactive::run(
                &mut league,
                &order,
                ScoringModel::default(),
                &mut rng,
                &mut stdin.lock(),
                &mut stdout.lock(),
            ) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Batch-apply a JSON array of results. Per-entry failures go to stderr
/// and do not stop the remaining entries; the exit code reflects whether
/// any entry failed.
fn run_results(league: &mut League, file: &PathBuf) -> ExitCode {
    let contents = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {e}", file.display());
            return ExitCode::FAILURE;
        }
    };
    let entries: Vec<ResultEntry> = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", file.display());
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for (entry, status) in entries.iter().zip(league.apply_results(&entries)) {
        if let Err(e) = status {
            eprintln!("{} vs {}: {e}", entry.home, entry.away);
            failures += 1;
        }
    }

    print!("{}", render_standings(&league.ranking()));
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_season(reports: &[MatchdayReport], json: bool, final_only: bool) {
    if json {
        match serde_json::to_string_pretty(reports) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error serializing report: {e}"),
        }
        return;
    }

    if final_only {
        if let Some(last) = reports.last() {
            print!("{}", render_standings(&last.standings));
        }
        return;
    }

    for report in reports {
        println!("Matchday {}", report.matchday);
        for m in &report.results {
            println!("{} {} - {} {}", m.home, m.home_goals, m.away_goals, m.away);
        }
        println!("Standings after matchday {}:", report.matchday);
        println!("{}", render_standings(&report.standings));
    }
}

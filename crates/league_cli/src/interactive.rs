//! Menu-driven interactive shell
//!
//! A line-oriented stdin loop: print the menu, read a choice, run the
//! operation, repeat. Errors are reported and the session keeps going;
//! end of input or choice 0 exits.

use std::io::{BufRead, Write};

use rand::Rng;

use league_core::{render_standings, League, ResultEntry};
use simulator::{play_match, ScoringModel, SeasonRunner};

const MENU: &str = "\n1. Print current ranking\n2. Add a match result\n3. Simulate a match\n\
                    4. Simulate the full season\n5. Add multiple match results\n0. Exit";

pub fn run<R: Rng>(
    league: &mut League,
    roster: &[String],
    model: ScoringModel,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                write!(output, "{}", render_standings(&league.ranking()))?;
            }
            "2" => {
                let Some(entry) = prompt_result(input, output)? else {
                    break;
                };
                match league.apply_result(&entry.home, &entry.away, entry.home_goals, entry.away_goals)
                {
                    Ok(()) => write!(output, "{}", render_standings(&league.ranking()))?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "3" => {
                let Some(home) = prompt(input, output, "Enter home team: ")? else {
                    break;
                };
                let Some(away) = prompt(input, output, "Enter away team: ")? else {
                    break;
                };
                match play_match(league, &model, &home, &away, rng) {
                    Ok(score) => writeln!(output, "{home} {score} {away}")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "4" => {
                let runner = SeasonRunner::new(model);
                match runner.run(league, roster, rng) {
                    Ok(reports) => {
                        for report in reports {
                            writeln!(output, "Matchday {}", report.matchday)?;
                            for m in &report.results {
                                writeln!(
                                    output,
                                    "{} {} - {} {}",
                                    m.home, m.home_goals, m.away_goals, m.away
                                )?;
                            }
                            writeln!(output, "Standings after matchday {}:", report.matchday)?;
                            write!(output, "{}\n", render_standings(&report.standings))?;
                        }
                    }
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "5" => {
                let Some(count) = prompt_number::<u32>(input, output, "Enter number of matches: ")?
                else {
                    break;
                };
                let mut entries = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    let Some(entry) = prompt_result(input, output)? else {
                        return Ok(());
                    };
                    entries.push(entry);
                }
                for (entry, status) in entries.iter().zip(league.apply_results(&entries)) {
                    if let Err(e) = status {
                        writeln!(output, "{} vs {}: {e}", entry.home, entry.away)?;
                    }
                }
                write!(output, "{}", render_standings(&league.ranking()))?;
            }
            "0" => {
                writeln!(output, "Exiting.")?;
                break;
            }
            _ => {
                writeln!(output, "Invalid choice. Please try again.")?;
            }
        }
    }
    Ok(())
}

/// Read one trimmed line; `None` means end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> std::io::Result<Option<String>> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        match read_line(input)? {
            None => return Ok(None),
            Some(line) if line.is_empty() => continue,
            Some(line) => return Ok(Some(line)),
        }
    }
}

/// Prompt until the line parses as a number.
fn prompt_number<T: std::str::FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> std::io::Result<Option<T>> {
    loop {
        match prompt(input, output, message)? {
            None => return Ok(None),
            Some(line) => match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(output, "Invalid number. Please try again.")?,
            },
        }
    }
}

fn prompt_result(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<Option<ResultEntry>> {
    let Some(home) = prompt(input, output, "Enter home team: ")? else {
        return Ok(None);
    };
    let Some(away) = prompt(input, output, "Enter away team: ")? else {
        return Ok(None);
    };
    let Some(home_goals) =
        prompt_number::<u8>(input, output, &format!("Enter goals scored by {home}: "))?
    else {
        return Ok(None);
    };
    let Some(away_goals) =
        prompt_number::<u8>(input, output, &format!("Enter goals scored by {away}: "))?
    else {
        return Ok(None);
    };
    Ok(Some(ResultEntry::new(&home, &away, home_goals, away_goals)))
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod interactive_tests;

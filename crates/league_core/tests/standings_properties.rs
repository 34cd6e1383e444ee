//! Property-style checks over randomized result sequences.

use league_core::{League, ResultEntry};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn sample_league() -> (League, Vec<String>) {
    let names: Vec<String> = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut league = League::new();
    for (i, name) in names.iter().enumerate() {
        league.add_club(name, (i % 5 + 1) as u8).unwrap();
    }
    (league, names)
}

#[test]
fn points_and_goals_are_conserved() {
    let (mut league, names) = sample_league();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut expected_points = 0u32;
    for _ in 0..500 {
        let h = rng.gen_range(0..names.len());
        let mut a = rng.gen_range(0..names.len());
        while a == h {
            a = rng.gen_range(0..names.len());
        }
        let hg: u8 = rng.gen_range(0..6);
        let ag: u8 = rng.gen_range(0..6);
        league.apply_result(&names[h], &names[a], hg, ag).unwrap();
        expected_points += if hg == ag { 2 } else { 3 };
    }

    let rows = league.ranking();
    let total_points: u32 = rows.iter().map(|r| r.points).sum();
    let total_for: u32 = rows.iter().map(|r| r.goals_for).sum();
    let total_against: u32 = rows.iter().map(|r| r.goals_against).sum();
    let total_played: u32 = rows.iter().map(|r| r.played).sum();

    assert_eq!(total_points, expected_points);
    assert_eq!(total_for, total_against);
    assert_eq!(total_played, 1000);
}

#[test]
fn ranking_is_a_strict_total_order() {
    let (mut league, names) = sample_league();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let entries: Vec<ResultEntry> = (0..200)
        .map(|_| {
            let h = rng.gen_range(0..names.len());
            let mut a = rng.gen_range(0..names.len());
            while a == h {
                a = rng.gen_range(0..names.len());
            }
            ResultEntry::new(&names[h], &names[a], rng.gen_range(0..5), rng.gen_range(0..5))
        })
        .collect();
    for status in league.apply_results(&entries) {
        status.unwrap();
    }

    // Every club appears exactly once and rows are strictly ordered by the
    // tie-break chain (points, GD, GF descending, name ascending).
    let rows = league.ranking();
    assert_eq!(rows.len(), names.len());
    for pair in rows.windows(2) {
        let (hi, lo) = (&pair[0], &pair[1]);
        let hi_key = (
            std::cmp::Reverse(hi.points),
            std::cmp::Reverse(hi.goal_difference),
            std::cmp::Reverse(hi.goals_for),
            hi.name.clone(),
        );
        let lo_key = (
            std::cmp::Reverse(lo.points),
            std::cmp::Reverse(lo.goal_difference),
            std::cmp::Reverse(lo.goals_for),
            lo.name.clone(),
        );
        assert!(hi_key < lo_key, "{} not strictly ahead of {}", hi.name, lo.name);
    }
}

#[test]
fn failed_operations_never_leak_partial_state() {
    let (mut league, names) = sample_league();
    league.apply_result(&names[0], &names[1], 2, 2).unwrap();
    let snapshot = league.ranking();

    assert!(league.apply_result(&names[0], "Zephyr", 9, 0).is_err());
    assert!(league.apply_result("Zephyr", &names[0], 0, 9).is_err());
    assert!(league.apply_result(&names[0], &names[0], 1, 0).is_err());
    assert!(league.add_club(&names[2], 4).is_err());

    assert_eq!(league.ranking(), snapshot);
}

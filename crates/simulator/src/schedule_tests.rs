use super::*;
use std::collections::{HashMap, HashSet};

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Club {i:02}")).collect()
}

#[test]
fn even_roster_has_two_n_minus_one_matchdays() {
    for n in [2usize, 4, 6, 20] {
        let schedule = Schedule::double_round_robin(&roster(n));
        assert_eq!(schedule.matchday_count(), 2 * (n - 1));
        for day in &schedule.matchdays {
            assert_eq!(day.len(), n / 2);
        }
    }
}

#[test]
fn no_club_plays_twice_in_one_matchday() {
    let schedule = Schedule::double_round_robin(&roster(8));
    for day in &schedule.matchdays {
        let mut seen = HashSet::new();
        for fixture in day {
            assert!(seen.insert(fixture.home.clone()), "{} twice", fixture.home);
            assert!(seen.insert(fixture.away.clone()), "{} twice", fixture.away);
        }
    }
}

#[test]
fn every_pair_meets_twice_with_venues_swapped() {
    let clubs = roster(6);
    let schedule = Schedule::double_round_robin(&clubs);

    let mut meetings: HashMap<(String, String), u32> = HashMap::new();
    for day in &schedule.matchdays {
        for fixture in day {
            *meetings
                .entry((fixture.home.clone(), fixture.away.clone()))
                .or_insert(0) += 1;
        }
    }

    // Each ordered pairing occurs exactly once: one home game and one
    // away game per unordered pair.
    for a in &clubs {
        for b in &clubs {
            if a == b {
                continue;
            }
            assert_eq!(meetings.get(&(a.clone(), b.clone())), Some(&1), "{a} vs {b}");
        }
    }
}

#[test]
fn odd_roster_gives_one_bye_per_matchday() {
    let clubs = roster(5);
    let schedule = Schedule::double_round_robin(&clubs);

    // Padded to 6 seats: 2 * 5 matchdays, 2 real fixtures each.
    assert_eq!(schedule.matchday_count(), 10);
    for day in &schedule.matchdays {
        assert_eq!(day.len(), 2);
    }

    // Every club still plays every other club twice.
    let mut games: HashMap<String, u32> = HashMap::new();
    for day in &schedule.matchdays {
        for fixture in day {
            *games.entry(fixture.home.clone()).or_insert(0) += 1;
            *games.entry(fixture.away.clone()).or_insert(0) += 1;
        }
    }
    for club in &clubs {
        assert_eq!(games.get(club), Some(&8));
    }
}

#[test]
fn tiny_rosters_produce_no_fixtures() {
    assert!(Schedule::double_round_robin(&[]).matchdays.is_empty());

    let lonely = roster(1);
    let schedule = Schedule::double_round_robin(&lonely);
    for day in &schedule.matchdays {
        assert!(day.is_empty());
    }
}

#[test]
fn schedule_is_deterministic_in_roster_order() {
    let clubs = roster(6);
    assert_eq!(
        Schedule::double_round_robin(&clubs),
        Schedule::double_round_robin(&clubs)
    );
}

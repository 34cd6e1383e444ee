use super::*;

#[test]
fn default_roster_has_twenty_clubs() {
    let config = RosterConfig::default();
    assert_eq!(config.clubs.len(), 20);
    assert!(config.validate().is_ok());

    let real = config.clubs.iter().find(|c| c.name == "Real Madrid").unwrap();
    assert_eq!(real.quality, 5);
    let huesca = config.clubs.iter().find(|c| c.name == "Huesca").unwrap();
    assert_eq!(huesca.quality, 1);
}

#[test]
fn parses_club_tables_from_toml() {
    let config: RosterConfig = toml::from_str(
        r#"
        [[club]]
        name = "North FC"
        quality = 4

        [[club]]
        name = "South FC"
        quality = 2
        "#,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.clubs.len(), 2);
    assert_eq!(config.clubs[0].name, "North FC");
    assert_eq!(config.clubs[1].quality, 2);
}

#[test]
fn duplicate_names_fail_validation() {
    let config: RosterConfig = toml::from_str(
        r#"
        [[club]]
        name = "Twin FC"
        quality = 3

        [[club]]
        name = "Twin FC"
        quality = 2
        "#,
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, RosterError::Validation(_)));
}

#[test]
fn quality_out_of_range_fails_validation() {
    for quality in [0u8, 6] {
        let config = RosterConfig {
            clubs: vec![ClubEntry {
                name: "Outlier FC".to_string(),
                quality,
            }],
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            RosterError::Validation(_)
        ));
    }
}

#[test]
fn empty_roster_fails_validation() {
    let config = RosterConfig { clubs: Vec::new() };
    assert!(matches!(
        config.validate().unwrap_err(),
        RosterError::Validation(_)
    ));
}

#[test]
fn build_league_preserves_roster_order() {
    let config = RosterConfig::default();
    let (league, order) = config.build_league().unwrap();

    assert_eq!(league.len(), 20);
    assert_eq!(order[0], "Real Madrid");
    assert_eq!(order[19], "Huesca");
    assert_eq!(league.club("Barcelona").unwrap().quality, 5);
}

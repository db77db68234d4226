use super::*;

fn sample() -> TournamentResults {
    let mut results = TournamentResults::new(
        "smoke",
        vec!["ID_AB".into(), "Random".into()],
        MatchConfig::default(),
    );
    results.add_match(
        "ID_AB",
        "Random",
        MatchResult {
            wins: 9,
            losses: 1,
            timeouts: 1,
        },
    );
    results
}

#[test]
fn test_totals_from_both_sides() {
    let results = sample();
    assert_eq!(results.totals("ID_AB"), (9, 10));
    assert_eq!(results.totals("Random"), (1, 10));
    assert_eq!(results.totals("nobody"), (0, 0));
}

#[test]
fn test_report_lists_matches_and_win_rates() {
    let report = sample().generate_report();
    assert!(report.contains("=== Tournament: smoke ==="));
    assert!(report.contains("ID_AB"));
    assert!(report.contains("90.0%"));
    assert!(report.contains("10.0%"));
}

#[test]
fn test_save_and_load_json() {
    let path = std::env::temp_dir().join(format!(
        "isolation_results_{}.json",
        std::process::id()
    ));
    let results = sample();

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, "smoke");
    assert_eq!(loaded.matches.len(), 1);
    assert_eq!(loaded.matches[0].result, results.matches[0].result);
    assert_eq!(loaded.config.board_size, 7);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = TournamentResults::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ResultsError::Io(_)));
}

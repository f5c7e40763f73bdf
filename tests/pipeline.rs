use std::fs;
use std::path::{Path, PathBuf};

use statcalc::pipeline::{FileOutcome, PipelineConfig, process_file, run};

fn fixtures_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("statcalc-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn fixture_config(tag: &str) -> PipelineConfig {
    PipelineConfig {
        data_dir: fixtures_dir(),
        results_dir: temp_dir(tag),
        ..PipelineConfig::default()
    }
}

fn read_table(dir: &Path, name: &str) -> Vec<Vec<String>> {
    let raw = fs::read_to_string(dir.join(name)).expect("result table should exist");
    raw.lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn teams_tables_are_written_and_ranked() {
    let config = fixture_config("teams");
    let outcome = process_file(&config, "season1.csv").expect("season1 should process");
    assert_eq!(outcome, FileOutcome::Teams);

    let absolute = read_table(&config.results_dir, "season1 - Teams - Absolute Stats.csv");
    assert_eq!(
        absolute[0],
        vec![
            "Rank",
            "Team",
            "GamesPlayed",
            "Points",
            "GoalDifference",
            "Wins",
            "Losses",
            "Draws",
            "GoalsScored",
            "GoalsAllowed",
            "CleanSheets",
            "CleanSheetsAgainst",
            "BigWins",
            "BigLosses"
        ]
    );
    // Arsenal: 2 wins and a loss, 7-2 goals, two clean sheets, one big win.
    assert_eq!(
        absolute[1],
        vec!["1", "Arsenal", "3", "6", "5", "2", "1", "0", "7", "2", "2", "0", "1", "0"]
    );
    assert_eq!(absolute[2][1], "Chelsea");
    assert_eq!(absolute[3][1], "Leeds");

    let normalized = read_table(&config.results_dir, "season1 - Teams - Normalized Stats.csv");
    assert_eq!(normalized[1][1], "Arsenal");
    assert_eq!(normalized[1][3], "2");
    assert_eq!(normalized[2][3], "1.3333");
    assert_eq!(normalized[3][3], "0.5");

    let form = read_table(&config.results_dir, "season1 - Teams - Latest Form.csv");
    assert_eq!(form[0], vec!["Rank", "Team", "Form", "LatestPPG", "NumGamesConsidered"]);
    assert_eq!(form[1], vec!["1", "Arsenal", "LWW", "2", "3"]);
    assert_eq!(form[2], vec!["2", "Chelsea", "WDL", "1.3333", "3"]);
    assert_eq!(form[3], vec!["3", "Leeds", "LD", "0.5", "2"]);
}

#[test]
fn individual_tables_are_written_in_2v2_mode() {
    let config = fixture_config("individuals");
    let outcome = process_file(&config, "fifa 2v2.csv").expect("2v2 file should process");
    assert_eq!(outcome, FileOutcome::TeamsAndIndividuals);

    let absolute = read_table(
        &config.results_dir,
        "fifa 2v2 - Individuals - Absolute Stats.csv",
    );
    // Raw-count PPG ranks Bob (2.0) ahead of Alice (5/3).
    assert_eq!(absolute[1][1], "Bob");
    assert_eq!(absolute[2][1], "Alice");

    let alice = absolute
        .iter()
        .find(|row| row[1] == "Alice")
        .expect("Alice row");
    // Alice sits on both sides of the drawn match, so both teams' totals
    // accrue: 3 games, 1 win, 2 draws, 5 points.
    assert_eq!(alice[2], "3");
    assert_eq!(alice[3], "5");
    assert_eq!(alice[5], "1");
    assert_eq!(alice[7], "2");

    for table in ["Normalized Stats", "Latest Form"] {
        assert!(
            config
                .results_dir
                .join(format!("fifa 2v2 - Individuals - {table}.csv"))
                .exists()
        );
    }
}

#[test]
fn pair_violation_withholds_individual_tables_only() {
    let config = fixture_config("withheld");
    let outcome = process_file(&config, "bad pairs 2v2.csv").expect("file should process");
    assert_eq!(outcome, FileOutcome::TeamsIndividualsWithheld);

    assert!(
        config
            .results_dir
            .join("bad pairs 2v2 - Teams - Absolute Stats.csv")
            .exists()
    );
    assert!(
        !config
            .results_dir
            .join("bad pairs 2v2 - Individuals - Absolute Stats.csv")
            .exists()
    );
}

#[test]
fn self_play_rejects_the_whole_file() {
    let config = fixture_config("selfplay");
    let outcome = process_file(&config, "selfplay.csv").expect("validation is recoverable");
    assert_eq!(outcome, FileOutcome::Rejected);
    assert!(
        !config
            .results_dir
            .join("selfplay - Teams - Absolute Stats.csv")
            .exists()
    );
}

#[test]
fn non_integer_goal_column_is_fatal() {
    let config = fixture_config("fatal");
    let err = process_file(&config, "bad goals.csv").expect_err("bad goals should fail");
    assert!(format!("{err:#}").contains("HomeGoals"));
}

#[test]
fn run_processes_every_file_in_sorted_order() {
    let data_dir = temp_dir("run-data");
    fs::write(
        data_dir.join("b.csv"),
        "HomeTeam,HomeGoals,AwayGoals,AwayTeam\nX,1,0,Y\n",
    )
    .unwrap();
    fs::write(
        data_dir.join("a.csv"),
        "HomeTeam,HomeGoals,AwayGoals,AwayTeam\nX,2,2,Y\n",
    )
    .unwrap();

    // The results directory does not exist yet; run() creates it.
    let results_dir = temp_dir("run-results").join("nested");
    let config = PipelineConfig {
        data_dir,
        results_dir: results_dir.clone(),
        ..PipelineConfig::default()
    };
    let summary = run(&config).expect("run should succeed");
    let names: Vec<&str> = summary.files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);
    assert!(
        summary
            .files
            .iter()
            .all(|(_, outcome)| *outcome == FileOutcome::Teams)
    );
    assert!(results_dir.join("a - Teams - Absolute Stats.csv").exists());
    assert!(results_dir.join("b - Teams - Latest Form.csv").exists());
}

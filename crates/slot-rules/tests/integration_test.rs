//! slot-rules Integration Tests
//!
//! Exercises the public API end to end:
//! - Payline evaluation with the standard symbol universe
//! - Cadence for the built-in rounds
//! - Loading game variants and rounds from disk
//! - Sharing evaluators across threads

use std::io::Write;
use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;

use slot_rules::rounds::default_rounds;
use slot_rules::{
    CadenceError, ConfigError, ConfigParser, EvaluationError, GameConfig, GameRound, RunPolicy,
    SlotCoordinate, SlotRules, SlotRulesError, WinningCombination,
};

fn rules() -> SlotRules {
    SlotRules::new(GameConfig::default()).unwrap()
}

fn win(symbol: u32, positions: &[usize]) -> WinningCombination {
    WinningCombination::new(symbol, positions.to_vec())
}

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ═══════════════════════════════════════════════════════════════════════════════
// WINNING COMBINATIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_paylines() {
    let rules = rules();

    assert_eq!(rules.evaluate(&[1, 1, 1, 5, 6]).unwrap(), vec![win(1, &[0, 1, 2])]);
    assert_eq!(rules.evaluate(&[0, 0, 0, 0]).unwrap(), vec![win(0, &[0, 1, 2, 3])]);
    assert_eq!(rules.evaluate(&[1, 0, 1, 5, 6]).unwrap(), vec![win(1, &[0, 1, 2])]);
    assert!(rules.evaluate(&[10, 10, 10, 1, 1]).unwrap().is_empty());

    let err = rules.evaluate(&[1, 1, 99]).unwrap_err();
    assert!(matches!(
        err,
        SlotRulesError::Evaluation(EvaluationError::InvalidSymbol { symbol: 99, .. })
    ));
}

#[test]
fn test_all_wild_lines_of_any_length() {
    let rules = rules();
    for len in 1..=8 {
        let payline = vec![0; len];
        let expected = vec![win(0, &(0..len).collect::<Vec<_>>())];
        assert_eq!(rules.evaluate(&payline).unwrap(), expected, "length {len}");
    }
}

#[test]
fn test_every_unknown_code_is_rejected() {
    let rules = rules();
    for code in [16, 42, 99, u32::MAX] {
        let result = rules.evaluate(&[2, 2, 2, code]);
        assert!(result.is_err(), "code {code} should be rejected");
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let rules = rules();
    let payline = [3, 0, 3, 3, 8, 0, 8, 8];
    let first = rules.evaluate(&payline).unwrap();
    let second = rules.evaluate(&payline).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_short_runs_without_wild_never_win() {
    let rules = rules();
    let paylines: [&[u32]; 4] = [&[1, 1, 2, 2, 3], &[4, 5, 4, 5, 4], &[9, 9], &[6, 7, 7, 6, 6]];
    for payline in paylines {
        assert!(rules.evaluate(payline).unwrap().is_empty(), "{payline:?}");
    }
}

#[test]
fn test_run_policy_from_config() {
    let mut config = GameConfig::default();
    config.combinations.run_policy = RunPolicy::AllQualifying;
    let rules = SlotRules::new(config).unwrap();

    let result = rules.evaluate(&[4, 4, 4, 12, 4, 4, 4]).unwrap();
    assert_eq!(result, vec![win(4, &[0, 1, 2]), win(4, &[4, 5, 6])]);
}

#[test]
fn test_shared_evaluator_across_threads() {
    let rules = Arc::new(rules());
    let paylines: Vec<Vec<u32>> = vec![
        vec![1, 1, 1, 5, 6],
        vec![2, 0, 2, 2, 7],
        vec![10, 11, 12, 13, 14],
        vec![0, 0, 0, 0, 0],
    ];

    let handles: Vec<_> = paylines
        .clone()
        .into_iter()
        .map(|payline| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || rules.evaluate(&payline).unwrap())
        })
        .collect();

    for (handle, payline) in handles.into_iter().zip(&paylines) {
        assert_eq!(handle.join().unwrap(), rules.evaluate(payline).unwrap());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CADENCE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_rounds_cadence() {
    let cadences = rules().compute_cadences(&default_rounds()).unwrap();

    let names: Vec<&str> = cadences.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["roundOne", "roundTwo", "roundThree"]);

    let round_two = &cadences["roundTwo"];
    for (actual, expected) in round_two.iter().zip([0.0, 2.0, 2.25, 2.5, 2.75]) {
        assert_relative_eq!(*actual, expected);
    }
}

#[test]
fn test_cadence_out_of_range_column() {
    let round = GameRound::new("broken", vec![SlotCoordinate::new(7, 0)]);
    let err = rules().compute_cadences(&[round]).unwrap_err();
    assert!(matches!(
        err,
        SlotRulesError::Cadence(CadenceError::ColumnOutOfRange { column: 7, column_size: 5 })
    ));
}

#[test]
fn test_wider_grid_cadence() {
    let mut config = GameConfig::default();
    config.cadence.column_size = 6;
    config.cadence.max_to_anticipate = 4;
    let rules = SlotRules::new(config).unwrap();

    let round = GameRound::new(
        "wide",
        vec![
            SlotCoordinate::new(0, 0),
            SlotCoordinate::new(1, 0),
            SlotCoordinate::new(2, 0),
            SlotCoordinate::new(4, 0),
        ],
    );
    let cadences = rules.compute_cadences(&[round]).unwrap();
    // Cumulative [1, 2, 3, 3, 4, 4] with window [2, 4)
    assert_eq!(cadences["wide"], vec![0.0, 0.25, 2.25, 4.25, 6.25, 6.5]);
}

#[test]
fn test_negative_cadence_step_rejected() {
    let mut config = GameConfig::default();
    config.cadence.default_cadence = -1.0;
    let result = SlotRules::new(config);
    assert!(matches!(
        result,
        Err(SlotRulesError::Config(ConfigError::Validation(_)))
    ));
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIG FILES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_yaml_config() {
    let file = write_temp(
        ".yaml",
        r#"
combinations:
  universe:
    wild: 50
    paying: [1, 2, 3]
    non_paying: [40]
  min_sequence_length: 2
"#,
    );

    let config = ConfigParser::new().load_config(file.path()).unwrap();
    let rules = SlotRules::new(config).unwrap();

    assert_eq!(rules.evaluate(&[2, 50, 40]).unwrap(), vec![win(2, &[0, 1])]);
    // Standard codes are no longer valid
    assert!(rules.evaluate(&[0, 1, 1]).is_err());
}

#[test]
fn test_load_json_rounds() {
    let file = write_temp(
        ".json",
        r#"[
            {
                "name": "late",
                "specialSymbols": [{ "column": 3, "row": 0 }, { "column": 3, "row": 1 }]
            }
        ]"#,
    );

    let rounds = ConfigParser::new().load_rounds(file.path()).unwrap();
    let cadences = rules().compute_cadences(&rounds).unwrap();
    assert_eq!(cadences["late"], vec![0.0, 0.25, 0.5, 0.75, 2.75]);
}

#[test]
fn test_invalid_config_file() {
    let file = write_temp(
        ".json",
        r#"{ "cadence": { "min_to_anticipate": 3, "max_to_anticipate": 3 } }"#,
    );
    let result = ConfigParser::new().load_config(file.path());
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "wild = 0");
    let result = ConfigParser::new().load_config(file.path());
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file() {
    let result = ConfigParser::new().load_config("/nonexistent/variant.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

use super::*;
use archetype_classifier::model::axes::Axis;

#[test]
fn test_parse_classify_command() {
    let cli = Cli::try_parse_from([
        "archetype-classifier",
        "classify",
        "--structure",
        "31",
        "--motivation",
        "31",
        "--cognitive",
        "12",
        "--task",
        "12",
    ])
    .unwrap();
    match cli.command {
        Command::Classify {
            structure,
            motivation,
            cognitive,
            task,
            json,
        } => {
            assert_eq!((structure, motivation, cognitive, task), (31, 31, 12, 12));
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_run_command_strict() {
    let cli = Cli::try_parse_from([
        "archetype-classifier",
        "run",
        "--input",
        "sessions.jsonl",
        "--out",
        "out",
        "--strict",
    ])
    .unwrap();
    match cli.command {
        Command::Run { input, out, strict } => {
            assert_eq!(input, PathBuf::from("sessions.jsonl"));
            assert_eq!(out, PathBuf::from("out"));
            assert!(strict);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from([
        "archetype-classifier",
        "profiles",
        "--config",
        "bands.json",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("bands.json")));
}

#[test]
fn test_classify_requires_all_axes() {
    let err = Cli::try_parse_from([
        "archetype-classifier",
        "classify",
        "--structure",
        "31",
    ]);
    assert!(err.is_err());
}

#[test]
fn test_load_config_defaults_without_path() {
    assert_eq!(load_config(None).unwrap(), ClassifierConfig::default_v1());
}

#[test]
fn test_negative_axis_value_parses_and_clamps() {
    let cli = Cli::try_parse_from([
        "archetype-classifier",
        "classify",
        "--structure",
        "-3",
        "--motivation",
        "21",
        "--cognitive",
        "21",
        "--task",
        "21",
    ])
    .unwrap();
    let Command::Classify {
        structure,
        motivation,
        cognitive,
        task,
        ..
    } = cli.command
    else {
        panic!("expected classify command");
    };
    assert_eq!(structure, -3);

    let raw = RawScores::new(structure, motivation, cognitive, task);
    assert_eq!(raw.out_of_range_axes(), vec![Axis::Structure]);
    let result = Classifier::default().classify(&raw);
    assert_eq!(result.normalized.structure, 0);
    assert_eq!(
        result,
        Classifier::default().classify(&RawScores::new(7, 21, 21, 21))
    );
}

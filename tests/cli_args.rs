// tests/cli_args.rs

use clap::Parser;

use construplan::cli::{CliArgs, Command};
use construplan::logging::parse_level_str;
use construplan::model::{ActivityDraft, ActivityPatch};

#[test]
fn add_collects_repeated_relation_flags() {
    let args = CliArgs::try_parse_from([
        "construplan", "add", "--title", "Framing", "--duration", "3", "--after", "1", "--after",
        "4", "--before", "7",
    ])
    .unwrap();

    let Command::Add(add) = args.command else {
        panic!("expected add");
    };
    let draft = ActivityDraft::from(add);

    assert_eq!(draft.title.as_deref(), Some("Framing"));
    assert_eq!(draft.duration, Some(3));
    assert_eq!(draft.predecessors, Some(vec![1, 4]));
    assert_eq!(draft.successors, Some(vec![7]));
}

#[test]
fn update_without_relation_flags_keeps_relations() {
    let args = CliArgs::try_parse_from(["construplan", "update", "2", "--duration", "-1"]).unwrap();

    let Command::Update(update) = args.command else {
        panic!("expected update");
    };
    let patch = ActivityPatch::from(update);

    assert_eq!(patch.duration, Some(-1));
    assert_eq!(patch.predecessors, None);
    assert_eq!(patch.successors, None);
}

#[test]
fn clear_after_empties_predecessors() {
    let args = CliArgs::try_parse_from(["construplan", "update", "2", "--clear-after"]).unwrap();

    let Command::Update(update) = args.command else {
        panic!("expected update");
    };

    assert_eq!(ActivityPatch::from(update).predecessors, Some(Vec::new()));
}

#[test]
fn clear_after_conflicts_with_after() {
    let result =
        CliArgs::try_parse_from(["construplan", "update", "2", "--after", "1", "--clear-after"]);

    assert!(result.is_err());
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let args = CliArgs::try_parse_from([
        "construplan", "schedule", "--json", "--data", "plan.json", "--log-level", "debug",
    ])
    .unwrap();

    assert!(matches!(args.command, Command::Schedule { json: true }));
    assert_eq!(args.data.as_deref(), Some(std::path::Path::new("plan.json")));
    assert!(args.log_level.is_some());
}

#[test]
fn log_level_names_are_case_insensitive() {
    assert_eq!(parse_level_str(" INFO "), Some(tracing::Level::INFO));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("loud"), None);
}

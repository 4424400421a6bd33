use clap::Parser;
use matchbox::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "matchbox-train",
        "--games",
        "5",
        "--seed",
        "3",
        "--no-progress",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["games_played"], 5);
    assert_eq!(parsed["metadata"]["seed"], 3);
    assert!(parsed["metadata"]["difficulty"].is_null());

    let results = &parsed["results"];
    let total = results["first_wins"].as_u64().unwrap()
        + results["second_wins"].as_u64().unwrap()
        + results["draws"].as_u64().unwrap();
    assert_eq!(total, 5);
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}/", summary_dir.display());

    let args = parse_args([
        "matchbox-train",
        "--difficulty",
        "1",
        "--no-progress",
        "--summary",
        &summary_arg,
    ]);

    execute(args).expect("training with directory summary should succeed");

    let expected_path = summary_dir.join("training_summary.json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["games_played"], 10);
    assert_eq!(parsed["metadata"]["difficulty"], 1);
    assert!(parsed["first"]["boards_learned"].as_u64().unwrap() > 0);
}

use page_trace::commands::{execute_convert, validate_args, validate_event_log, ConvertArgs};
use page_trace::output::read_events;
use page_trace::parser::EventTime;
use std::fs;
use std::path::PathBuf;

fn write_input(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("a.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_execute_convert_writes_event_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &temp_dir,
        "(1, 0, 1)\nPage Fault: (0, 1)\n(2, 1, 3)\ngarbage line\n(3, 0, 1)\nPage Fault: (0, 1)\n",
    );
    let output = temp_dir.path().join("log.json");

    let args = ConvertArgs {
        input,
        output: output.clone(),
        warn_unmatched: true,
    };

    assert!(validate_args(&args).is_ok());
    let report = execute_convert(&args).unwrap();

    assert_eq!(report.events, 5);
    assert_eq!(report.requests, 3);
    assert_eq!(report.page_faults, 2);
    assert_eq!(report.unmatched_lines, 1);

    let events = read_events(&output).unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events[4].time, EventTime::After(3));
}

#[test]
fn test_execute_convert_cr_line_endings() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(&temp_dir, "(1, 0, 1)\rPage Fault: (0, 1)\r(2, 1, 3)\r");
    let output = temp_dir.path().join("log.json");

    let args = ConvertArgs {
        input,
        output: output.clone(),
        ..Default::default()
    };

    let report = execute_convert(&args).unwrap();
    assert_eq!(report.events, 3);
    assert_eq!(read_events(&output).unwrap()[1].time, EventTime::After(1));
}

#[test]
fn test_validate_event_log_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = validate_event_log(&temp_dir.path().join("missing.json")).unwrap_err();

    assert!(!format!("{:#}", err).contains("Failed to write"));
}

#[test]
fn test_execute_convert_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(&temp_dir, "Page Fault: (2, 2)\n(10, 1, 4)\nPage Fault: (1, 4)\n");
    let output = temp_dir.path().join("out/log.json");

    let args = ConvertArgs {
        input,
        output: output.clone(),
        ..Default::default()
    };

    execute_convert(&args).unwrap();
    let first = fs::read(&output).unwrap();

    execute_convert(&args).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_execute_convert_empty_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(&temp_dir, "");
    let output = temp_dir.path().join("log.json");

    let args = ConvertArgs {
        input,
        output: output.clone(),
        ..Default::default()
    };

    let report = execute_convert(&args).unwrap();
    assert_eq!(report.events, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_execute_convert_missing_input_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("log.json");

    let args = ConvertArgs {
        input: temp_dir.path().join("missing.txt"),
        output: output.clone(),
        ..Default::default()
    };

    assert!(execute_convert(&args).is_err());
    assert!(!output.exists());
}

#[test]
fn test_validate_event_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(&temp_dir, "(1, 0, 1)\nPage Fault: (0, 1)\n");
    let output = temp_dir.path().join("log.json");

    let args = ConvertArgs {
        input,
        output: output.clone(),
        ..Default::default()
    };
    execute_convert(&args).unwrap();

    assert!(validate_event_log(&output).is_ok());
}

#[test]
fn test_validate_event_log_rejects_bad_kind() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.json");
    fs::write(
        &path,
        r#"[{"time": 1, "process": 0, "page": 1, "event": "eviction"}]"#,
    )
    .unwrap();

    assert!(validate_event_log(&path).is_err());
}

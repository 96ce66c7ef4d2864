use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
}

fn write_store(path: &Path, tasks: serde_json::Value) {
    std::fs::write(path, serde_json::to_string_pretty(&tasks).unwrap()).unwrap();
}

fn run(store_path: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_tasklist");
    Command::new(exe)
        .args(args)
        .env("TASKLIST_STORE_PATH", store_path)
        .env("TASKLIST_CONFIG_PATH", temp_path("no-config.json"))
        .output()
        .expect("failed to run done command")
}

fn completed_store() -> serde_json::Value {
    serde_json::json!([
        {
            "Completed": true,
            "Description": "old",
            "CreatedAt": "2025-12-20T00:00:00Z",
            "CompletedAt": "2025-12-21T00:00:00Z"
        }
    ])
}

#[test]
fn done_command_marks_completed() {
    let store_path = temp_path("cli-done.json");
    write_store(
        &store_path,
        serde_json::json!([
            {
                "ID": "",
                "Completed": false,
                "Description": "first",
                "CreatedAt": "2025-12-20T00:00:00Z",
                "CompletedAt": "0001-01-01T00:00:00Z"
            },
            {
                "ID": "",
                "Completed": false,
                "Description": "second",
                "CreatedAt": "2025-12-20T01:00:00Z",
                "CompletedAt": "0001-01-01T00:00:00Z"
            }
        ]),
    );

    let output = run(&store_path, &["--done", "2"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_eq!(stored[0]["Completed"], false);
    assert_eq!(stored[0]["CompletedAt"], "0001-01-01T00:00:00Z");
    assert_eq!(stored[1]["Completed"], true);
    let completed_at = OffsetDateTime::parse(
        stored[1]["CompletedAt"].as_str().expect("completed_at string"),
        &Rfc3339,
    )
    .expect("completed_at rfc3339");
    assert!(completed_at.year() > 1);
    assert!(stored[1].get("ID").is_none());
}

#[test]
fn done_command_rejects_out_of_range_position() {
    let store_path = temp_path("cli-done-range.json");
    write_store(&store_path, completed_store());

    let output = run(&store_path, &["--done", "5"]);
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_index"));
}

#[test]
fn done_command_refreshes_completed_task_by_default() {
    let store_path = temp_path("cli-done-refresh.json");
    write_store(&store_path, completed_store());

    let output = run(&store_path, &["--done", "1"]);
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_ne!(stored[0]["CompletedAt"], "2025-12-21T00:00:00Z");
}

#[test]
fn done_command_keeps_timestamp_with_keep_override() {
    let store_path = temp_path("cli-done-keep.json");
    write_store(&store_path, completed_store());

    let output = run(
        &store_path,
        &["--done", "1", "--config-override", "recomplete=keep"],
    );
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_eq!(stored[0]["CompletedAt"], "2025-12-21T00:00:00Z");
}

#[test]
fn done_command_keeps_timestamp_with_config_file() {
    let store_path = temp_path("cli-done-config.json");
    let config_path = temp_path("keep-config.json");
    write_store(&store_path, completed_store());
    std::fs::write(&config_path, "{\"recomplete\": \"keep\"}").unwrap();

    let exe = env!("CARGO_BIN_EXE_tasklist");
    let output = Command::new(exe)
        .args(["--done", "1"])
        .env("TASKLIST_STORE_PATH", &store_path)
        .env("TASKLIST_CONFIG_PATH", &config_path)
        .output()
        .expect("failed to run done command");
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();
    std::fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    assert_eq!(stored[0]["CompletedAt"], "2025-12-21T00:00:00Z");
}

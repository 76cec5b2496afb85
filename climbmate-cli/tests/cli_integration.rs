use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the compiled binary pointed at a scratch store
fn climbmate_cmd(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("climbmate").expect("Failed to find climbmate binary");
    cmd.env_remove("CLIMBMATE_STORE")
        .env_remove("CLIMBMATE_PLATFORM")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(store);
    cmd
}

fn init_sample(store: &Path) {
    climbmate_cmd(store).arg("init-sample").assert().success();
}

#[test]
fn test_init_sample_then_list() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("data").join("videos.json");

    climbmate_cmd(&store)
        .arg("init-sample")
        .assert()
        .success()
        .stdout(contains("Wrote 2 sample videos"));
    assert!(store.exists());

    climbmate_cmd(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("clip-001 | mp4 | sport | 5.10a"))
        .stdout(contains("clip-002 | mov | bouldering | V4"));

    Ok(())
}

#[test]
fn test_list_without_store() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    climbmate_cmd(&dir.path().join("missing.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No videos found."));

    Ok(())
}

#[test]
fn test_filter_by_route_and_grade() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["filter", "--route", "bouldering", "--grade", "V4"])
        .assert()
        .success()
        .stdout(contains("clip-002").and(contains("clip-001").not()));

    climbmate_cmd(&store)
        .args(["filter", "--route", "bouldering", "--grade", "V9"])
        .assert()
        .success()
        .stdout(contains("No matched videos."));

    Ok(())
}

#[test]
fn test_filter_invalid_grade_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["filter", "--route", "sport", "--grade", "V4"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Invalid grade 'V4' for route type sport"));

    Ok(())
}

#[test]
fn test_filter_route_without_grade_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    climbmate_cmd(&dir.path().join("videos.json"))
        .args(["filter", "--route", "sport"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn test_filter_by_day_range() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    climbmate_cmd(&store)
        .args(["filter", "--from", &today, "--to", &today])
        .assert()
        .success()
        .stdout(contains("clip-001").and(contains("clip-002").not()));

    climbmate_cmd(&store)
        .args(["filter", "--from", "2999-01-01"])
        .assert()
        .success()
        .stdout(contains("No matched videos."));

    climbmate_cmd(&store)
        .args(["filter", "--to", "01/02/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    Ok(())
}

#[test]
fn test_add_marker_persists_and_pauses() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "clip-001", "--at", "5", "--text", "heel hook"])
        .assert()
        .success()
        .stdout(contains("Added marker m3 at 5s to clip-001"));

    let saved = std::fs::read_to_string(&store)?;
    assert!(saved.contains("\"heel hook\""));
    assert!(saved.contains("\"atSecond\": 5"));

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-001", "--until", "20"])
        .assert()
        .success()
        .stdout(contains("   5s paused  [m3] heel hook"))
        .stdout(contains("  15s paused  [m1] crux clip"))
        .stdout(contains("  20s playing"))
        .stdout(contains("[m2]").not());

    Ok(())
}

#[test]
fn test_add_marker_unknown_video_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "nope", "--at", "5", "--text", "x"])
        .assert()
        .failure()
        .stderr(contains("Video not found: nope"));

    Ok(())
}

#[test]
fn test_play_defaults_to_past_last_marker() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-001"])
        .assert()
        .success()
        .stdout(contains("Playing clip-001 (pause-on-marker)"))
        .stdout(contains("  42s paused  [m2] rest at the jug"))
        .stdout(contains("  47s playing"));

    Ok(())
}

#[test]
fn test_play_linear_never_pauses() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-001", "--mode", "linear"])
        .assert()
        .success()
        .stdout(contains("paused").not());

    Ok(())
}

#[test]
fn test_play_unknown_video_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-404"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Video not found: clip-404"));

    Ok(())
}

#[test]
fn test_invalid_record_fails_whole_listing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    std::fs::write(
        &store,
        r#"[
  {
    "id": "bad-1",
    "createdAt": "2026-01-10T08:00:00Z",
    "containerFormat": "mov",
    "routeType": "bouldering",
    "grade": "5.12a",
    "markers": []
  }
]"#,
    )?;

    climbmate_cmd(&store)
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Invalid record 'bad-1'"));

    Ok(())
}

#[test]
fn test_log_file_receives_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    let log_file = dir.path().join("logs").join("climbmate.log");

    climbmate_cmd(&store)
        .arg("--log-file")
        .arg(&log_file)
        .arg("--verbose")
        .arg("init-sample")
        .assert()
        .success();

    let logged = std::fs::read_to_string(&log_file)?;
    assert!(logged.contains("[INFO]"));
    assert!(logged.contains("sample videos"));

    Ok(())
}

#[test]
fn test_default_marker_id_skips_ids_in_use() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "clip-002", "--at", "3", "--text", "sit start"])
        .args(["--marker-id", "m2"])
        .assert()
        .success();

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "clip-002", "--at", "9", "--text", "top out"])
        .assert()
        .success()
        .stdout(contains("Added marker m3 at 9s to clip-002"));

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-002", "--step", "1", "--until", "12"])
        .assert()
        .success()
        .stdout(contains("   3s paused  [m2] sit start"))
        .stdout(contains("   9s paused  [m3] top out"));

    Ok(())
}

#[test]
fn test_add_marker_rejects_existing_marker_id() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "clip-001", "--at", "30", "--text", "again"])
        .args(["--marker-id", "m1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Video 'clip-001' already has a marker 'm1'"));

    let saved = std::fs::read_to_string(&store)?;
    assert!(!saved.contains("\"again\""));

    Ok(())
}

#[test]
fn test_play_near_the_end_of_the_second_range() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("videos.json");
    init_sample(&store);

    climbmate_cmd(&store)
        .args(["add-marker", "--id", "clip-002", "--at", "9223372036854775807"])
        .args(["--text", "last second"])
        .assert()
        .success();

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-002", "--start", "9223372036854775800"])
        .assert()
        .success()
        .stdout(contains("9223372036854775807s paused  [m1] last second"));

    climbmate_cmd(&store)
        .args(["play", "--id", "clip-002", "--mode", "linear"])
        .args(["--start", "9223372036854775806", "--step", "9223372036854775807"])
        .assert()
        .success()
        .stdout(contains("9223372036854775807s playing"));

    Ok(())
}

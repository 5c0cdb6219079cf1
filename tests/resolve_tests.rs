//! Resolution pipeline tests: group name -> icon id -> icon file -> disk

mod common;

use assert_cmd::Command;
use common::TestSde;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn resolve_cmd(sde: &TestSde) -> Command {
    let mut cmd = Command::cargo_bin("iconseek").unwrap();
    cmd.env_remove("ICONSEEK_GROUPS");
    cmd.env_remove("ICONSEEK_ICONS");
    cmd.arg("resolve");
    cmd.args(["--groups", sde.groups_path().to_str().unwrap()]);
    cmd.args(["--icons", sde.icons_path().to_str().unwrap()]);
    cmd
}

#[test]
fn test_resolve_prints_file_name() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("Manufacture & Research")
        .assert()
        .success()
        .stdout(predicate::str::contains("27_64_1.png"))
        .stdout(predicate::str::contains("icon 27"));
}

#[test]
fn test_resolve_is_case_insensitive() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("manufacture & research")
        .assert()
        .success()
        .stdout(predicate::str::contains("27_64_1.png"));
}

#[test]
fn test_resolve_with_images_prints_disk_path() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("Manufacture & Research")
        .args(["--images", sde.images_dir().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("icons/27_64_1.png"));
}

#[test]
fn test_resolve_with_images_reports_missing_file() {
    let sde = TestSde::seeded();
    std::fs::remove_file(sde.images_dir().join("icons/27_64_1.png")).unwrap();
    resolve_cmd(&sde)
        .arg("Manufacture & Research")
        .args(["--images", sde.images_dir().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No file named '27_64_1.png'"));
}

#[test]
fn test_resolve_group_not_found() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("Implants")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 'Implants' not found"));
}

#[test]
fn test_resolve_no_icon_assigned() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("Blueprints")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no icon assigned"));
}

#[test]
fn test_resolve_icon_record_missing() {
    let sde = TestSde::seeded();
    resolve_cmd(&sde)
        .arg("Ships")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Icon record 99 referenced by group 'Ships' is missing",
        ));
}

#[test]
fn test_resolve_flat_schema_form() {
    let sde = TestSde::new();
    sde.write_groups("54:\n  groupName: Minerals\n  iconID: 27\n");
    sde.write_icons("27:\n  iconFile: 27_64_1.png\n");
    resolve_cmd(&sde)
        .arg("Minerals")
        .assert()
        .success()
        .stdout(predicate::str::contains("27_64_1.png"));
}

#[test]
fn test_resolve_duplicate_group_ids_last_write_wins() {
    let sde = TestSde::new();
    sde.write_groups(
        "10:\n  groupName: First\n  iconID: 27\n\
         10:\n  groupName: Second\n  iconID: 27\n",
    );
    sde.write_icons("27:\n  iconFile: 27_64_1.png\n");

    resolve_cmd(&sde)
        .arg("Second")
        .assert()
        .success()
        .stdout(predicate::str::contains("27_64_1.png"));

    resolve_cmd(&sde)
        .arg("First")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 'First' not found"));
}

#[test]
fn test_resolve_unique_fails_on_duplicate_files() {
    let sde = TestSde::seeded();
    sde.add_image("backup/27_64_1.png");
    resolve_cmd(&sde)
        .arg("Manufacture & Research")
        .args(["--images", sde.images_dir().to_str().unwrap(), "--unique"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple files named '27_64_1.png'"));
}

#[test]
fn test_resolve_json_output() {
    let sde = TestSde::seeded();
    let output = resolve_cmd(&sde)
        .arg("Manufacture & Research")
        .args(["--images", sde.images_dir().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["resolved"]["group_id"], 1436);
    assert_eq!(value["resolved"]["icon_id"], 27);
    assert_eq!(value["resolved"]["file_name"], "27_64_1.png");
    assert_eq!(value["match_kind"], "exact");
    assert_eq!(value["matches"][0], "icons/27_64_1.png");
}

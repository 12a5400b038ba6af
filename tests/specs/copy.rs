//! Behavioral specs for `pathsel copy`.

use crate::prelude::*;

/// > Files keep their layout relative to the base directory
#[test]
fn copy_preserves_layout() {
    let temp = sample_project();
    let dest = Project::empty();

    copy("**/*.txt", &dest.path_str())
        .pwd(temp.path())
        .exclude("file.txt")
        .passes()
        .stdout_has("2 files, 9 bytes");

    assert_eq!(
        std::fs::read_to_string(dest.path().join("temp/file.txt")).unwrap(),
        "temp"
    );
    assert_eq!(
        std::fs::read_to_string(dest.path().join("other path/temp/file.txt")).unwrap(),
        "other"
    );
    assert!(!dest.path().join("file.txt").exists());
}

/// > --dry-run reports the plan and writes nothing
#[test]
fn dry_run_copies_nothing() {
    let temp = sample_project();
    let dest = Project::empty();
    let out = dest.path().join("out");

    copy("temp/*.txt", out.to_str().unwrap())
        .pwd(temp.path())
        .args(&["--dry-run"])
        .passes()
        .stdout_has("1 files (dry run)");

    assert!(!out.exists());
}

/// > JSON output serializes the copy report
#[test]
fn copy_json_report() {
    let temp = sample_project();
    let dest = Project::empty();

    let json = copy("*.txt", &dest.path_str()).pwd(temp.path()).json();
    assert_eq!(json["bytes"], 4);
    assert_eq!(json["dry_run"], false);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0]["target"].as_str().unwrap().ends_with("file.txt"));
}

/// > Nothing to copy exits 1
#[test]
fn copy_without_matches_exits_one() {
    let temp = sample_project();
    let dest = Project::empty();

    copy("**/*.dll", &dest.path_str())
        .pwd(temp.path())
        .exits(1);
}

/// > Copying onto the base directory leaves files untouched
#[test]
fn copy_onto_itself_keeps_contents() {
    let temp = sample_project();

    copy("*.txt", ".")
        .pwd(temp.path())
        .passes()
        .stdout_has("0 files, 0 bytes, 1 already in place");

    assert_eq!(
        std::fs::read_to_string(temp.path().join("file.txt")).unwrap(),
        "root"
    );
}

/// > Two files flattened onto the same name are a usage error
#[test]
fn colliding_targets_exit_two() {
    let temp = Project::empty();
    temp.file("a/f.txt", "a");
    temp.file("b/f.txt", "b");
    temp.file("base/.keep", "");
    let dest = Project::empty();

    copy("../*/f.txt", &dest.path_str())
        .pwd(temp.path().join("base"))
        .exits(2)
        .stderr_has("would both be copied to");

    assert!(!dest.path().join("f.txt").exists());
}

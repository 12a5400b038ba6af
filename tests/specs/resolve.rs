//! Behavioral specs for `pathsel resolve`.

use crate::prelude::*;

/// > `**` matches files at any depth, including the base itself
#[test]
fn recursive_pattern_matches_every_depth() {
    let temp = sample_project();

    resolve("**/file.txt")
        .pwd(temp.path())
        .relative()
        .passes()
        .stdout_lines(&["file.txt", "other path/temp/file.txt", "temp/file.txt"]);
}

/// > A single `*` never crosses a separator
#[test]
fn single_star_stays_in_one_directory() {
    let temp = sample_project();

    resolve("*/file.txt")
        .pwd(temp.path())
        .relative()
        .passes()
        .stdout_lines(&["temp/file.txt"]);
}

/// > Exclusions remove matches; order of exclusions is irrelevant
#[test]
fn exclusions_remove_matches() {
    let temp = sample_project();

    resolve("**/*.txt")
        .pwd(temp.path())
        .relative()
        .exclude("temp/*")
        .exclude("file.txt")
        .passes()
        .stdout_lines(&["other path/temp/file.txt"]);
}

/// > `;` separates several exclusion patterns in one argument
#[test]
fn semicolon_separated_exclusions() {
    let temp = sample_project();

    resolve("**/*.txt")
        .pwd(temp.path())
        .relative()
        .exclude("temp/*; other path/**")
        .passes()
        .stdout_lines(&["file.txt"]);
}

/// > `;` separates several include patterns; results are unioned
#[test]
fn semicolon_separated_includes() {
    let temp = sample_project();

    resolve("file.txt;temp/*.txt")
        .pwd(temp.path())
        .relative()
        .passes()
        .stdout_lines(&["file.txt", "temp/file.txt"]);
}

/// > Matching ignores case
#[test]
fn matching_is_case_insensitive() {
    let temp = sample_project();

    resolve("TEMP/*.TXT")
        .pwd(temp.path())
        .relative()
        .passes()
        .stdout_lines(&["temp/file.txt"]);
}

/// > Hidden and gitignored files are still selected
#[test]
fn hidden_and_ignored_files_are_selected() {
    let temp = Project::empty();
    temp.file(".gitignore", "build/\n");
    temp.file("build/out.dll", "x");
    temp.file(".hidden/a.dll", "x");

    resolve("**/*.dll")
        .pwd(temp.path())
        .relative()
        .passes()
        .stdout_lines(&[".hidden/a.dll", "build/out.dll"]);
}

/// > `--base` anchors relative patterns
#[test]
fn base_flag_anchors_patterns() {
    let temp = sample_project();
    let base = temp.path().join("other path");

    resolve("**/*.txt")
        .args(&["--base", base.to_str().unwrap()])
        .relative()
        .passes()
        .stdout_lines(&["temp/file.txt"]);
}

/// > Rooted patterns ignore the base directory
#[test]
fn rooted_pattern_ignores_base() {
    let temp = sample_project();
    let pattern = format!("{}/temp/*.txt", temp.path_str());
    let elsewhere = Project::empty();

    let out = resolve(&pattern)
        .args(&["--base", &elsewhere.path_str()])
        .passes()
        .stdout();
    assert_eq!(out.lines().count(), 1);
    assert!(out.trim_end().ends_with(&native("temp/file.txt")));
}

/// > Exit code 1 when nothing matches
#[test]
fn no_matches_exits_one() {
    let temp = sample_project();

    resolve("**/*.dll")
        .pwd(temp.path())
        .exits(1)
        .stdout_has(predicates::str::is_empty());
}

/// > A blank pattern list selects nothing
#[test]
fn blank_pattern_selects_nothing() {
    let temp = sample_project();

    resolve("  ").pwd(temp.path()).exits(1);
}

/// > A missing base directory yields no matches, not an error
#[test]
fn missing_base_directory_is_empty() {
    let temp = sample_project();
    let missing = temp.path().join("does-not-exist");

    resolve("**/*")
        .args(&["--base", missing.to_str().unwrap()])
        .exits(1);
}

/// > JSON output lists the base and matched files
#[test]
fn json_output() {
    let temp = sample_project();

    let json = resolve("temp/*.txt").pwd(temp.path()).relative().json();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0], native("temp/file.txt"));
    assert!(json["base"].is_string());
}

/// > Absolute output is the default
#[test]
fn absolute_output_by_default() {
    let temp = sample_project();

    let out = resolve("temp/*.txt").pwd(temp.path()).passes().stdout();
    let line = out.lines().next().unwrap();
    assert!(std::path::Path::new(line).is_absolute(), "{}", line);
}

//! Behavioral specs for pathsel.toml handling.

use crate::prelude::*;

/// > Config exclusions apply in addition to command-line exclusions
#[test]
fn config_exclusions_are_appended() {
    let temp = sample_project();
    temp.config("[resolve]\nexclude = [\"other path/**\"]\n");

    resolve("**/*.txt")
        .pwd(temp.path())
        .relative()
        .exclude("file.txt")
        .passes()
        .stdout_lines(&["temp/file.txt"]);
}

/// > Config base is relative to the config file's directory
#[test]
fn config_base_is_relative_to_config() {
    let temp = sample_project();
    temp.config("[resolve]\nbase = \"other path\"\n");
    temp.file("other path/sub/.keep", "");

    resolve("**/*.txt")
        .pwd(temp.path().join("other path/sub"))
        .relative()
        .passes()
        .stdout_lines(&["temp/file.txt"]);
}

/// > `--base` wins over the config base
#[test]
fn base_flag_overrides_config() {
    let temp = sample_project();
    temp.config("[resolve]\nbase = \"other path\"\n");

    resolve("*.txt")
        .pwd(temp.path())
        .args(&["--base", &temp.path_str()])
        .relative()
        .passes()
        .stdout_lines(&["file.txt"]);
}

/// > -C <FILE> specifies config file
#[test]
fn short_config_flag_works() {
    let temp = sample_project();
    temp.file("custom.toml", "version = 1\n[resolve]\nexclude = \"temp/**;other path/**\"\n");

    resolve("**/*.txt")
        .pwd(temp.path())
        .args(&["-C", "custom.toml"])
        .relative()
        .passes()
        .stdout_lines(&["file.txt"]);
}

/// > A missing explicit config is a configuration error
#[test]
fn missing_explicit_config_exits_two() {
    let temp = sample_project();

    resolve("**/*.txt")
        .pwd(temp.path())
        .args(&["-C", "nope.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unknown keys are warnings (forward compatibility)
#[test]
fn unknown_config_key_warns() {
    let temp = sample_project();
    temp.config("colour = \"blue\"\n[resolve]\nrecurse = true\n");

    resolve("*.txt")
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `colour`")
        .stderr_has("unrecognized field `resolve.recurse`");
}

/// > Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = sample_project();
    temp.config("[resolve]\nexclude = []\n");

    resolve("*.txt")
        .pwd(temp.path())
        .passes()
        .stderr_lacks("warning");
}

/// > Unsupported version is a configuration error
#[test]
fn unsupported_version_exits_two() {
    let temp = sample_project();
    temp.config("version = 7\n");

    resolve("*.txt")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 7");
}

/// > Discovery walks up to the git root
#[test]
fn config_discovered_from_subdirectory() {
    let temp = sample_project();
    temp.config("[resolve]\nexclude = [\"*.txt\"]\n");

    resolve("*.txt")
        .pwd(temp.path().join("temp"))
        .exits(1);
}

/// > Mistyped values are configuration errors
#[test]
fn mistyped_base_exits_two() {
    let temp = sample_project();
    temp.config("[resolve]\nbase = 5\n");

    resolve("*.txt")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("`resolve.base` must be a string");
}

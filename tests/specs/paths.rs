//! Behavioral specs for the path arithmetic commands.

use crate::prelude::*;

fn run(args: &[&str]) -> String {
    let output = pathsel_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8_lossy(&output.stdout).trim_end_matches('\n').to_string()
}

#[test]
#[cfg(unix)]
fn base_truncates_at_first_wildcard() {
    assert_eq!(run(&["base", "/src/app/**/bin/*.dll"]), "/src/app");
    assert_eq!(run(&["base", "/src/app/file.txt", "--file"]), "/src/app");
    assert_eq!(run(&["base", "/src/app/"]), "/src/app");
}

#[test]
fn base_of_leading_wildcard_is_empty() {
    assert_eq!(run(&["base", "**/*.txt"]), "");
}

#[test]
#[cfg(unix)]
fn relative_between_directories() {
    assert_eq!(run(&["relative", "/a/b/c", "/a/d"]), "../../d/");
    assert_eq!(run(&["relative", "/a/b", "/a/b"]), "./");
}

#[test]
#[cfg(unix)]
fn relative_to_file() {
    assert_eq!(run(&["relative", "/a/b", "/a/c/x.txt", "--file"]), "../c/x.txt");
}

#[test]
#[cfg(unix)]
fn absolute_against_base() {
    assert_eq!(run(&["absolute", "x/../y/z.txt", "--base", "/root"]), "/root/y/z.txt");
    assert_eq!(run(&["absolute", "/already/./there"]), "/already/there");
}

#[test]
fn absolute_of_empty_is_empty() {
    assert_eq!(run(&["absolute", ""]), "");
}

//! Behavioral specs for `nbkit init`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > nbkit init writes settings.ini with the fixed key set
#[test]
fn init_writes_default_settings() {
    let temp = Project::empty();

    nbkit_cmd()
        .args(["init", "mylib", "alice"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created"));

    let settings = temp.read_settings();
    for line in [
        "lib_name = mylib",
        "user = alice",
        "branch = master",
        "git_url = https://github.com/%(user)s/data_lab/tree/%(branch)s/",
        "lib_path = %(lib_name)s",
        "nbs_path = nbs",
        "doc_path = docs",
        "tst_flags = ",
        "version = 0.0.1",
        "custom_sidebar = False",
    ] {
        assert!(settings.contains(line), "missing {line:?} in:\n{settings}");
    }
}

/// > init --path writes into another directory
#[test]
fn init_path_flag() {
    let temp = Project::empty();
    let proj = temp.dir("proj");

    nbkit_cmd()
        .args(["init", "mylib", "alice", "--path", proj.to_str().unwrap()])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(proj.join("settings.ini").is_file());
    assert!(!temp.path().join("settings.ini").exists());
}

/// > init then get returns the values back, interpolated
#[test]
fn init_then_get_round_trips() {
    let temp = Project::empty();

    nbkit_cmd()
        .args(["init", "mylib", "alice", "--branch", "main"])
        .current_dir(temp.path())
        .assert()
        .success();

    nbkit_cmd()
        .args(["get", "git_url"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("https://github.com/alice/data_lab/tree/main/\n");
}

/// > init refuses to overwrite without --force
#[test]
fn init_refuses_overwrite() {
    let temp = Project::with_settings();
    let before = temp.read_settings();

    nbkit_cmd()
        .args(["init", "otherlib", "bob"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--force"));

    assert_eq!(temp.read_settings(), before);
}

/// > init --force overwrites
#[test]
fn init_force_overwrites() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["init", "otherlib", "bob", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.read_settings().contains("lib_name = otherlib"));
}

/// > init into a missing directory fails
#[test]
fn init_missing_directory_fails() {
    let temp = Project::empty();

    nbkit_cmd()
        .args(["init", "mylib", "alice", "--path", "no/such/dir"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("io error"));
}

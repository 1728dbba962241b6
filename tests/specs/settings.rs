//! Behavioral specs for `nbkit get`, `set` and `list`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// DISCOVERY SPECS
// =============================================================================

/// > Settings are found from any descendant directory
#[test]
fn get_from_nested_directory() {
    let temp = Project::with_settings();
    let nested = temp.dir("nbs/chapter1/drafts");

    nbkit_cmd()
        .args(["get", "lib_name"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout("mylib\n");
}

/// > No settings file up to the root is a config error
#[test]
fn missing_settings_file_fails() {
    let temp = Project::empty();

    nbkit_cmd()
        .args(["--cfg-name", ABSENT_CFG_NAME, "get", "lib_name"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not found").and(predicates::str::contains("nbkit init")));
}

/// > Malformed settings file is a config error with a line number
#[test]
fn malformed_settings_file_fails() {
    let temp = Project::empty();
    temp.settings("[DEFAULT]\nthis line has no delimiter\n");

    nbkit_cmd()
        .args(["get", "lib_name"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("settings.ini:2"));
}

// =============================================================================
// GET SPECS
// =============================================================================

/// > get prints interpolated values
#[test]
fn get_interpolates() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["get", "LIB_PATH"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("mylib\n");
}

/// > get --raw prints the stored value
#[test]
fn get_raw() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["get", "lib_path", "--raw"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("%(lib_name)s\n");
}

/// > get --resolve joins path keys onto the settings directory
#[test]
fn get_resolve_path_key() {
    let temp = Project::with_settings();
    let nested = temp.dir("nbs");

    let output = nbkit_cmd()
        .args(["get", "nbs_path", "--resolve"])
        .current_dir(&nested)
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8_lossy(&output.stdout);
    let expected = std::fs::canonicalize(temp.path()).unwrap().join("nbs");
    assert_eq!(printed.trim_end(), expected.display().to_string());
}

/// > get of an unknown key is a config error
#[test]
fn get_missing_key_fails() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["get", "version"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("key not found: version"));
}

// =============================================================================
// SET SPECS
// =============================================================================

/// > set persists the value to the settings file
#[test]
fn set_persists() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["set", "version", "0.2.0"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.read_settings().contains("version = 0.2.0"));

    nbkit_cmd()
        .args(["get", "version"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("0.2.0\n");
}

/// > set overwrites existing keys in place
#[test]
fn set_overwrites_in_place() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["set", "User", "bob"])
        .current_dir(temp.path())
        .assert()
        .success();

    let settings = temp.read_settings();
    assert!(settings.contains("user = bob"));
    assert!(!settings.contains("alice"));
    assert!(settings.find("lib_name").unwrap() < settings.find("user").unwrap());
}

/// > set rejects values with a stray `%`
#[test]
fn set_rejects_bad_interpolation() {
    let temp = Project::with_settings();
    let before = temp.read_settings();

    nbkit_cmd()
        .args(["set", "ratio", "50%"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("interpolation"));

    assert_eq!(temp.read_settings(), before);
}

/// > set rejects keys that would not read back as the same key
#[test]
fn set_rejects_unwritable_key() {
    let temp = Project::with_settings();
    let before = temp.read_settings();

    nbkit_cmd()
        .args(["set", "a=b", "c"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("argument error"));

    assert_eq!(temp.read_settings(), before);
}

/// > A multi-line value with a blank line keeps the file readable
#[test]
fn set_multiline_value_then_get() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["set", "tst_flags", "slow\n\nfast"])
        .current_dir(temp.path())
        .assert()
        .success();

    nbkit_cmd()
        .args(["get", "tst_flags"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("slow\n\nfast\n");

    nbkit_cmd()
        .args(["get", "user"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("alice\n");
}

// =============================================================================
// LIST SPECS
// =============================================================================

/// > list prints every key in file order
#[test]
fn list_text() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with(
            "lib_name = mylib\nuser = alice\nbranch = master\n",
        ))
        .stdout(predicates::str::contains("lib_path = mylib\n"));
}

/// > list --raw prints stored values
#[test]
fn list_raw() {
    let temp = Project::with_settings();

    nbkit_cmd()
        .args(["list", "--raw"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("lib_path = %(lib_name)s\n"));
}

/// > list -o json produces a JSON object
#[test]
fn list_json() {
    let temp = Project::with_settings();

    let output = nbkit_cmd()
        .args(["list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(json["values"]["lib_path"], "mylib");
    assert_eq!(json["values"]["user"], "alice");
    assert!(json["path"].as_str().unwrap().ends_with("settings.ini"));
}

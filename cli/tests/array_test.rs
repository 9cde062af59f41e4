//! Integration tests for the array commands: `sort`, `get`, `slice`, `compare`.

mod common;

use common::ferret;
use predicates::prelude::*;

#[test]
fn sort_mixed_values() {
    ferret()
        .arg("sort")
        .write_stdin(r#"[{"a": 1}, [2], "b", 3, null, 1.5, true, [1, 1]]"#)
        .assert()
        .success()
        .stdout("[null,true,3,1.5,\"b\",[1,1],[2],{\"a\":1}]\n");
}

#[test]
fn sort_reverse_dedup() {
    ferret()
        .args(["sort", "--reverse", "--dedup"])
        .write_stdin("[1, 3, 2, 3, 1]")
        .assert()
        .success()
        .stdout("[3,2,1]\n");
}

#[test]
fn sort_rejects_non_array() {
    ferret()
        .arg("sort")
        .write_stdin(r#"{"a": 1}"#)
        .assert()
        .failure()
        .stderr("error: expected an array, found object\n");
}

#[test]
fn get_in_range() {
    ferret()
        .args(["get", "--index", "1"])
        .write_stdin(r#"[10, "twenty", 30]"#)
        .assert()
        .success()
        .stdout("\"twenty\"\n");
}

#[test]
fn get_out_of_range_is_null() {
    for index in ["3", "-1", "1000"] {
        ferret()
            .args(["get", "--index", index])
            .write_stdin("[10, 20, 30]")
            .assert()
            .success()
            .stdout("null\n");
    }
}

#[test]
fn slice_clamps() {
    ferret()
        .args(["slice", "--from", "2", "--to", "100"])
        .write_stdin("[0, 1, 2, 3]")
        .assert()
        .success()
        .stdout("[2,3]\n");

    ferret()
        .args(["slice", "--from", "3", "--to", "1"])
        .write_stdin("[0, 1, 2, 3]")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn compare_values() {
    for (left, right, expected) in [
        ("[0, 0]", "0", "1"),
        ("[0, 0]", "{}", "-1"),
        ("[]", "[]", "0"),
        ("[1]", "[0]", "1"),
        ("-1", "2", "-1"),
    ] {
        ferret()
            .args(["compare", left, right])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }
}

#[test]
fn rejected_arguments_show_usage() {
    ferret()
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--index"));
}

//! Integration tests for the `fmt` and `type` commands.

mod common;

use common::{ferret, temp_file};
use predicates::prelude::*;

#[test]
fn fmt_compacts_stdin() {
    ferret()
        .arg("fmt")
        .write_stdin("[ 1, 2 ,\n 3 ]")
        .assert()
        .success()
        .stdout("[1,2,3]\n");
}

#[test]
fn fmt_empty_array() {
    ferret()
        .args(["fmt", "-"])
        .write_stdin("[ ]")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn fmt_sorts_object_keys() {
    let file = temp_file(r#"{"b": [true, null], "a": 1.5}"#);
    ferret()
        .arg("fmt")
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\"a\":1.5,\"b\":[true,null]}\n");
}

#[test]
fn fmt_missing_file() {
    ferret()
        .args(["fmt", "does-not-exist.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: does-not-exist.json:"));
}

#[test]
fn fmt_invalid_json() {
    ferret()
        .arg("fmt")
        .write_stdin("[1,")
        .assert()
        .failure()
        .stderr(predicate::str::contains("json:"));
}

#[test]
fn type_names() {
    for (literal, name) in [
        ("null", "none"),
        ("false", "boolean"),
        ("-3", "int"),
        ("0.5", "float"),
        (r#""s""#, "string"),
        ("[]", "array"),
        ("{}", "object"),
    ] {
        ferret()
            .args(["type", literal])
            .assert()
            .success()
            .stdout(format!("{name}\n"));
    }
}

// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn squan() -> Command {
    Command::cargo_bin("squan").expect("binary builds")
}

#[test]
fn compile_prints_the_wire_state() {
    squan()
        .args(["compile", "(3,0)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("233455677011|998bbaddcffe"));
}

#[test]
fn compile_of_a_lone_swap() {
    squan()
        .args(["compile", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("011233998bba|455677ddcffe"));
}

#[test]
fn alg_mode_compiles_the_inverse() {
    squan()
        .args(["compile", "--alg", "(3,0)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("677011233455|998bbaddcffe"));
}

#[test]
fn expand_canonicalizes_karnotation() {
    squan()
        .args(["expand", "U U'"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3,0/-3,0\n"));
}

#[test]
fn invert_expands_first() {
    squan()
        .args(["invert", "1,0/4,-2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-4,2/-1,0\n"));
}

#[test]
fn unknown_shorthand_fails_with_its_alignment() {
    squan()
        .args(["compile", "aa"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("aa").and(predicate::str::contains("00")),
        );
}

#[test]
fn render_writes_an_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.svg");
    squan()
        .args(["render", "-o"])
        .arg(&path)
        .arg("(1,0)/(0,-1)")
        .assert()
        .success();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg xmlns="));
    assert_eq!(svg.matches("class=\"sticker\"").count(), 40);
}

#[test]
fn render_accepts_wire_states() {
    squan()
        .args(["render", "--hex", "--layer", "top", "011233455677|998bbaddcffe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id=\"0 inner\""));
}

#[test]
fn render_rejects_malformed_wire_states() {
    squan()
        .args(["render", "--hex", "0112"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed puzzle state"));
}

#[test]
fn scheme_overlay_reaches_the_render() {
    let dir = tempfile::tempdir().unwrap();
    let scheme_path = dir.path().join("scheme.json");
    std::fs::write(
        &scheme_path,
        r##"{ "scheme": { "top": "#123123" } }"##,
    )
    .unwrap();
    squan()
        .args(["render", "--layer", "top", "--scheme"])
        .arg(&scheme_path)
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::contains("#123123"));
}

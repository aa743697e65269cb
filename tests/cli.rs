use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn escapetime() -> Command {
    Command::cargo_bin("escapetime").unwrap()
}

#[test]
fn writes_a_graymap_of_the_requested_size() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("cubic.pgm");
    escapetime()
        .args(&["-o", out.to_str().unwrap(), "-s", "40x30", "-i", "10"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P5"));
    assert!(bytes.len() > 40 * 30);
}

#[test]
fn writes_a_png_from_a_preset() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("ship.png");
    escapetime()
        .args(&["-o", out.to_str().unwrap(), "-p", "burning-ship", "-s", "32x32"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn accepts_negative_ranges() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("zoom.pgm");
    escapetime()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "16x16",
            "-x",
            "-0.5,0.5",
            "-y",
            "-1.5,-0.5",
            "-f",
            "quadratic",
        ])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn degenerate_range_is_a_render_failure() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("flat.pgm");
    escapetime()
        .args(&["-o", out.to_str().unwrap(), "-x", "5,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid domain"));
}

#[test]
fn zero_width_is_a_render_failure() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.pgm");
    escapetime()
        .args(&["-o", out.to_str().unwrap(), "-s", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid resolution"));
}

#[test]
fn unparseable_size_is_rejected_by_the_parser() {
    escapetime()
        .args(&["-o", "never.pgm", "-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn unknown_formula_is_rejected() {
    escapetime()
        .args(&["-o", "never.pgm", "-f", "quartic"])
        .assert()
        .failure();
}
